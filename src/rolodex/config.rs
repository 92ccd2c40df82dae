use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";

pub const DEFAULT_PERIOD: u32 = 7;
pub const MIN_PERIOD: u32 = 1;
pub const MAX_PERIOD: u32 = 365;

/// Configuration for rolodex, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Contacts file; relative paths are resolved against the data dir
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// Notes file; relative paths are resolved against the data dir
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Days covered by `birthdays` when no period is given
    #[serde(default = "default_period")]
    pub birthday_period: u32,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_period() -> u32 {
    DEFAULT_PERIOD
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            birthday_period: DEFAULT_PERIOD,
        }
    }
}

impl RolodexConfig {
    pub const KEYS: [&'static str; 3] = ["contacts-file", "notes-file", "birthday-period"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.contacts_file)
    }

    pub fn notes_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.notes_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "contacts-file" => Some(self.contacts_file.clone()),
            "notes-file" => Some(self.notes_file.clone()),
            "birthday-period" => Some(self.birthday_period.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "contacts-file" => self.contacts_file = non_empty(key, value)?,
            "notes-file" => self.notes_file = non_empty(key, value)?,
            "birthday-period" => self.birthday_period = parse_period(value)?,
            _ => return Err(RolodexError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

/// Parses a birthday period, which must lie within `MIN_PERIOD..=MAX_PERIOD`.
pub fn parse_period(value: &str) -> Result<u32> {
    let period = value.trim().parse::<u32>().map_err(|_| {
        RolodexError::Validation(format!("Period must be a number, got '{}'", value))
    })?;
    check_period(period)
}

pub fn check_period(period: u32) -> Result<u32> {
    if !(MIN_PERIOD..=MAX_PERIOD).contains(&period) {
        return Err(RolodexError::Validation(format!(
            "Period must be between {} and {} days, got {}",
            MIN_PERIOD, MAX_PERIOD, period
        )));
    }
    Ok(period)
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(RolodexError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
