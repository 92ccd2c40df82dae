//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence port used by both aggregates. It moves
//! raw JSON documents in and out of storage and knows nothing about contacts or notes:
//! turning a document into a validated [`AddressBook`](crate::address_book::AddressBook)
//! or [`Notebook`](crate::notebook::Notebook) is the aggregate's job, so a corrupted file
//! fails exactly like bad user input would.
//!
//! ## Collections
//!
//! Every operation takes a [`Collection`]:
//! - `Collection::Contacts`: a JSON object keyed by contact name
//! - `Collection::Notes`: a JSON array of `{note, tags}` entries
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one pretty-printed JSON file per collection
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! Errors from the backing medium (`Io`, `Serialization`) are returned unchanged.

use crate::error::Result;
use serde_json::Value;
use std::fmt;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Notes,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Contacts => write!(f, "contacts"),
            Collection::Notes => write!(f, "notes"),
        }
    }
}

/// Abstract interface for the raw persisted documents.
pub trait DataStore {
    /// Whether a document for `collection` has been saved before
    fn exists(&self, collection: Collection) -> bool;

    /// Read the document. Missing documents are an error; check [`DataStore::exists`] first.
    fn load(&self, collection: Collection) -> Result<Value>;

    /// Replace the document
    fn save(&mut self, collection: Collection, data: &Value) -> Result<()>;
}
