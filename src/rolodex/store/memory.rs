use super::{Collection, DataStore};
use crate::error::{Result, RolodexError};
use serde_json::Value;
use std::collections::HashMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Collection, Value>,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, collection: Collection, data: Value) -> Self {
        self.documents.insert(collection, data);
        self
    }

    /// Every `save` fails with a permission error; loads still work.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn document(&self, collection: Collection) -> Option<&Value> {
        self.documents.get(&collection)
    }
}

impl DataStore for InMemoryStore {
    fn exists(&self, collection: Collection) -> bool {
        self.documents.contains_key(&collection)
    }

    fn load(&self, collection: Collection) -> Result<Value> {
        self.documents.get(&collection).cloned().ok_or_else(|| {
            RolodexError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {} document stored", collection),
            ))
        })
    }

    fn save(&mut self, collection: Collection, data: &Value) -> Result<()> {
        if self.read_only {
            return Err(RolodexError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} store is read-only", collection),
            )));
        }
        self.documents.insert(collection, data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn read_only_store_keeps_documents_unchanged() {
        let mut store = InMemoryStore::new()
            .with_document(Collection::Notes, json!([]))
            .read_only();
        assert!(matches!(
            store.save(Collection::Notes, &json!([{"note": "x", "tags": []}])),
            Err(RolodexError::Io(_))
        ));
        assert_eq!(store.load(Collection::Notes).unwrap(), json!([]));
        assert!(!store.exists(Collection::Contacts));
    }
}
