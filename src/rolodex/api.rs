//! # API Facade
//!
//! [`RolodexApi`] is the single entry point for every rolodex operation. It owns the
//! storage backend and both aggregates, so a process builds exactly one of these at
//! startup and passes it to whatever UI drives it. There is no global state.
//!
//! The facade only dispatches: argument validation, mutation and saving happen in
//! `commands/*.rs`. Like the commands, it never writes to stdout or stderr.
//!
//! `RolodexApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::address_book::AddressBook;
use crate::commands;
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::{Collection, DataStore};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{BirthdayGroup, CmdMessage, CmdResult, MessageLevel};

pub struct RolodexApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notebook: Notebook,
    config: RolodexConfig,
    data_dir: PathBuf,
}

impl<S: DataStore> RolodexApi<S> {
    /// Loads both aggregates from `store`. A collection that was never saved starts empty.
    pub fn open(store: S, config: RolodexConfig, data_dir: PathBuf) -> Result<Self> {
        let mut book = AddressBook::new();
        if store.exists(Collection::Contacts) {
            book.load(&store)?;
            info!("Contacts were loaded ({} records)", book.len());
        } else {
            debug!("No contacts file yet, starting with an empty address book");
        }

        let mut notebook = Notebook::new();
        if store.exists(Collection::Notes) {
            notebook.load(&store)?;
            info!("Notes were loaded ({} notes)", notebook.len());
        } else {
            debug!("No notes file yet, starting with an empty notebook");
        }

        Ok(Self {
            store,
            book,
            notebook,
            config,
            data_dir,
        })
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Contacts

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::add(&mut self.book, &mut self.store, name, phone)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::contacts::delete(&mut self.book, &mut self.store, name)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::contacts::change_phone(&mut self.book, &mut self.store, name, old, new)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::remove_phone(&mut self.book, &mut self.store, name, phone)
    }

    pub fn show_phones(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show_phones(&self.book, name)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        commands::contacts::add_birthday(&mut self.book, &mut self.store, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show_birthday(&self.book, name)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::contacts::all(&self.book)
    }

    pub fn search_contacts(&self, term: &str) -> Result<CmdResult> {
        commands::contacts::search(&self.book, term)
    }

    /// Upcoming birthdays; `None` uses the configured default period.
    pub fn birthdays(&self, period: Option<u32>) -> Result<CmdResult> {
        self.birthdays_from(period, Local::now().date_naive())
    }

    pub fn birthdays_from(&self, period: Option<u32>, today: NaiveDate) -> Result<CmdResult> {
        let period = period.unwrap_or(self.config.birthday_period);
        commands::birthdays::run(&self.book, period, today)
    }

    // Notes

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::notes::add(&mut self.notebook, &mut self.store, text)
    }

    pub fn update_note(&mut self, position: usize, text: &str) -> Result<CmdResult> {
        commands::notes::update(&mut self.notebook, &mut self.store, position, text)
    }

    pub fn replace_note(&mut self, position: usize, text: &str) -> Result<CmdResult> {
        commands::notes::replace(&mut self.notebook, &mut self.store, position, text)
    }

    pub fn remove_note(&mut self, position: usize) -> Result<CmdResult> {
        commands::notes::remove(&mut self.notebook, &mut self.store, position)
    }

    pub fn note_by_index(&self, position: usize) -> Result<CmdResult> {
        commands::notes::by_index(&self.notebook, position)
    }

    pub fn find_notes(&self, text: &str) -> Result<CmdResult> {
        commands::notes::by_text(&self.notebook, text)
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::by_tag(&self.notebook, tag)
    }

    pub fn show_notes(&self) -> Result<CmdResult> {
        commands::notes::show_all(&self.notebook)
    }

    pub fn add_tag(&mut self, position: usize, tag: &str) -> Result<CmdResult> {
        commands::notes::add_tag(&mut self.notebook, &mut self.store, position, tag)
    }

    pub fn remove_tag(&mut self, position: usize, tag: &str) -> Result<CmdResult> {
        commands::notes::remove_tag(&mut self.notebook, &mut self.store, position, tag)
    }

    // Misc

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn api() -> RolodexApi<InMemoryStore> {
        RolodexApi::open(
            InMemoryStore::new(),
            RolodexConfig::default(),
            PathBuf::from("."),
        )
        .unwrap()
    }

    #[test]
    fn open_starts_empty_without_documents() {
        let api = api();
        assert!(api.address_book().is_empty());
        assert!(api.notebook().is_empty());
    }

    #[test]
    fn open_loads_existing_documents() {
        let store = InMemoryStore::new()
            .with_document(
                Collection::Contacts,
                json!({"Ann": {"name": "Ann", "phones": ["1234567890"], "birthday": null}}),
            )
            .with_document(Collection::Notes, json!([{"note": "hi there", "tags": []}]));
        let api = RolodexApi::open(store, RolodexConfig::default(), PathBuf::from(".")).unwrap();
        assert_eq!(api.address_book().len(), 1);
        assert_eq!(api.notebook().len(), 1);
    }

    #[test]
    fn open_fails_on_invalid_documents() {
        let store = InMemoryStore::new().with_document(
            Collection::Contacts,
            json!({"Ann": {"name": "Ann", "phones": ["12"], "birthday": null}}),
        );
        assert!(matches!(
            RolodexApi::open(store, RolodexConfig::default(), PathBuf::from(".")),
            Err(RolodexError::Validation(_))
        ));
    }

    #[test]
    fn mutations_are_written_to_the_store() {
        let mut api = api();
        api.add_contact("john", "0987683542").unwrap();
        api.add_note("remember the milk").unwrap();

        let store = api.store();
        assert!(store.exists(Collection::Contacts));
        assert_eq!(
            store.document(Collection::Notes).unwrap(),
            &json!([{"note": "remember the milk", "tags": []}])
        );
    }

    #[test]
    fn birthdays_use_configured_default_period() {
        let mut api = api();
        api.add_contact("john", "0987683542").unwrap();
        api.add_birthday("john", "10.11.1984").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();

        assert!(api.birthdays_from(None, today).unwrap().birthdays.is_empty());
        assert_eq!(api.birthdays_from(Some(10), today).unwrap().birthdays.len(), 1);
    }

    #[test]
    fn config_changes_apply_to_the_session() {
        let dir = TempDir::new().unwrap();
        let mut api = RolodexApi::open(
            InMemoryStore::new(),
            RolodexConfig::default(),
            dir.path().to_path_buf(),
        )
        .unwrap();
        api.add_contact("john", "0987683542").unwrap();
        api.add_birthday("john", "10.11.1984").unwrap();
        api.config(ConfigAction::Set("birthday-period".into(), "30".into()))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        assert_eq!(api.birthdays_from(None, today).unwrap().birthdays.len(), 1);
    }

    #[test]
    fn unsaved_changes_are_not_kept() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileStore::new(blocker.join("contacts.json"), blocker.join("notes.json"));
        let mut api =
            RolodexApi::open(store, RolodexConfig::default(), dir.path().to_path_buf()).unwrap();

        assert!(matches!(
            api.add_contact("john", "0987683542"),
            Err(RolodexError::Io(_))
        ));
        assert!(api.add_note("remember the milk").is_err());
        assert!(api.address_book().is_empty());
        assert!(api.notebook().is_empty());
        assert!(api.all_contacts().unwrap().listed_records.is_empty());
    }
}
