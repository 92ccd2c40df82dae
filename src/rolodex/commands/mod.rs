//! # Command Layer
//!
//! One function per user command. Each command validates its raw arguments into value
//! objects, runs a single operation on the [`AddressBook`](crate::address_book::AddressBook)
//! or [`Notebook`](crate::notebook::Notebook), saves the aggregate it changed and reports
//! back through a [`CmdResult`]. Nothing here prints; messages are data for the UI.

use crate::config::RolodexConfig;
use crate::note::NoteView;
use crate::record::Record;

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod notes;

/// Shortest note text `add-note` accepts, and shortest `find-notes` query.
pub const MIN_NOTE_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Contacts sharing the same upcoming birthday date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub date: String,
    pub names: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub listed_notes: Vec<NoteView>,
    pub birthdays: Vec<BirthdayGroup>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<NoteView>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<BirthdayGroup>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: RolodexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
