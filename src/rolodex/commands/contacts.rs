use crate::address_book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::fields::{Birthday, PersonName, PhoneNumber};
use crate::record::Record;
use crate::store::DataStore;
use log::info;

fn contact_not_found(name: &PersonName) -> RolodexError {
    RolodexError::NotFound(format!("Contact '{}' not found", name))
}

fn existing<'a>(book: &'a AddressBook, name: &PersonName) -> Result<&'a Record> {
    book.find(name).ok_or_else(|| contact_not_found(name))
}

fn existing_mut<'a>(book: &'a mut AddressBook, name: &PersonName) -> Result<&'a mut Record> {
    book.find_mut(name).ok_or_else(|| contact_not_found(name))
}

/// Saves the edited copy, and only then makes it the live address book.
fn commit<S: DataStore>(book: &mut AddressBook, edited: AddressBook, store: &mut S) -> Result<()> {
    edited.save(store)?;
    *book = edited;
    Ok(())
}

/// Creates the contact, or adds another phone to an existing one.
pub fn add<S: DataStore>(
    book: &mut AddressBook,
    store: &mut S,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let phone: PhoneNumber = phone.parse()?;

    let mut edited = book.clone();
    match edited.find_mut(&name) {
        Some(record) => {
            if !record.add_phone(phone.clone()) {
                return Err(RolodexError::Duplicate(format!(
                    "Phone '{}' already exists for contact '{}'",
                    phone, name
                )));
            }
        }
        None => edited.add_record(Record::with_phone(name.clone(), phone.clone())),
    }

    commit(book, edited, store)?;
    info!("Added phone {} to contact {}", phone, name);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact added successfully: {} {}",
        name, phone
    ))))
}

pub fn delete<S: DataStore>(book: &mut AddressBook, store: &mut S, name: &str) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let mut edited = book.clone();
    let removed = edited.delete(&name)?;
    commit(book, edited, store)?;
    info!("Deleted contact {}", name);
    Ok(CmdResult::default()
        .with_listed_records(vec![removed])
        .with_message(CmdMessage::success(format!(
            "Contact '{}' deleted successfully",
            name
        ))))
}

pub fn change_phone<S: DataStore>(
    book: &mut AddressBook,
    store: &mut S,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let old_phone: PhoneNumber = old_phone.parse()?;
    let new_phone: PhoneNumber = new_phone.parse()?;

    let mut edited = book.clone();
    existing_mut(&mut edited, &name)?.edit_phone(&old_phone, new_phone.clone())?;
    commit(book, edited, store)?;
    info!("Changed phone {} -> {} for {}", old_phone, new_phone, name);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact '{}' updated successfully",
        name
    ))))
}

pub fn remove_phone<S: DataStore>(
    book: &mut AddressBook,
    store: &mut S,
    name: &str,
    phone: &str,
) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let phone: PhoneNumber = phone.parse()?;

    let mut edited = book.clone();
    if !existing_mut(&mut edited, &name)?.remove_phone(&phone) {
        return Err(RolodexError::NotFound(format!(
            "Phone '{}' not found for contact '{}'",
            phone, name
        )));
    }
    commit(book, edited, store)?;
    info!("Removed phone {} from {}", phone, name);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone {} removed from '{}'",
        phone, name
    ))))
}

pub fn show_phones(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let record = existing(book, &name)?;
    let message = if record.phones().is_empty() {
        CmdMessage::info(format!("{} has no phones", name))
    } else {
        CmdMessage::success(format!("{}: {}", name, record.get_phones().join(", ")))
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn add_birthday<S: DataStore>(
    book: &mut AddressBook,
    store: &mut S,
    name: &str,
    birthday: &str,
) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let birthday: Birthday = birthday.parse()?;

    let mut edited = book.clone();
    let previous = existing_mut(&mut edited, &name)?.add_birthday(birthday);
    commit(book, edited, store)?;
    info!("Set birthday {} for {}", birthday, name);

    let mut result = CmdResult::default();
    if let Some(previous) = previous.filter(|p| *p != birthday) {
        result.add_message(CmdMessage::warning(format!(
            "Replaced previous birthday {}",
            previous
        )));
    }
    result.add_message(CmdMessage::success("Birthday added successfully"));
    Ok(result)
}

pub fn show_birthday(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let name = PersonName::new(name);
    let birthday = existing(book, &name)?
        .birthday()
        .ok_or_else(|| RolodexError::NotFound(format!("{} has no birthday set", name)))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{} birthday: {}",
        name, birthday
    ))))
}

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_records(book.get_records().to_vec());
    if book.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No contacts have been added yet")));
    }
    Ok(result)
}

pub fn search(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(RolodexError::Validation(
            "Search term cannot be empty".to_string(),
        ));
    }

    let hits: Vec<Record> = book.search(term).into_iter().cloned().collect();
    let result = CmdResult::default();
    if hits.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No results found!")));
    }
    Ok(result.with_listed_records(hits))
}
