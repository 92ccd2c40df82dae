use super::{Collection, DataStore};
use crate::error::{Result, RolodexError};
use log::{debug, trace};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    contacts_file: PathBuf,
    notes_file: PathBuf,
}

impl FileStore {
    pub fn new(contacts_file: PathBuf, notes_file: PathBuf) -> Self {
        Self {
            contacts_file,
            notes_file,
        }
    }

    pub fn path(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Contacts => &self.contacts_file,
            Collection::Notes => &self.notes_file,
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn exists(&self, collection: Collection) -> bool {
        self.path(collection).exists()
    }

    fn load(&self, collection: Collection) -> Result<Value> {
        let path = self.path(collection);
        debug!("Loading {} from {}", collection, path.display());
        let content = fs::read_to_string(path).map_err(RolodexError::Io)?;
        let data = serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        trace!("Loaded {} ({} bytes)", collection, content.len());
        Ok(data)
    }

    fn save(&mut self, collection: Collection, data: &Value) -> Result<()> {
        let path = self.path(collection);
        self.ensure_parent(path)?;
        let content = serde_json::to_string_pretty(data).map_err(RolodexError::Serialization)?;
        fs::write(path, content).map_err(RolodexError::Io)?;
        debug!("Saved {} to {}", collection, path.display());
        Ok(())
    }
}
