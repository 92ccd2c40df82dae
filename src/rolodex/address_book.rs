//! # Address Book
//!
//! The keyed collection of all [`Record`]s. Keys are normalized [`PersonName`]s, so
//! "john" and "JOHN" address the same contact. Records keep the order in which they
//! were first inserted (or loaded), which is the order used for display.
//!
//! ## Birthday Window
//!
//! [`AddressBook::birthdays_per_period_from`] groups contacts whose next birthday is
//! fewer than `period` days away. A birthday on 29 February is celebrated on 28
//! February in years without one.
//!
//! ## File Shape
//!
//! ```json
//! {
//!     "John": { "name": "John", "phones": ["0987683542"], "birthday": "03.11.1984" },
//!     "Simon": { "name": "Simon", "phones": [], "birthday": null }
//! }
//! ```
//!
//! Every phone and birthday is re-validated on load.

use crate::error::{Result, RolodexError};
use crate::fields::{Birthday, PersonName, PhoneNumber};
use crate::record::Record;
use crate::store::{Collection, DataStore};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const WINDOW_KEY_FORMAT: &str = "%A, %d %B";

/// A contact as it appears in the contacts file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for ContactData {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.get_phones().into_iter().map(String::from).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl TryFrom<ContactData> for Record {
    type Error = RolodexError;

    fn try_from(data: ContactData) -> Result<Self> {
        let mut record = Record::new(PersonName::new(&data.name));
        for phone in &data.phones {
            record.add_phone(phone.parse::<PhoneNumber>()?);
        }
        if let Some(birthday) = data.birthday.as_deref().filter(|b| !b.trim().is_empty()) {
            record.add_birthday(birthday.parse::<Birthday>()?);
        }
        Ok(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record` under its name. An existing record with the same name is
    /// replaced in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &PersonName) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &PersonName) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    pub fn delete(&mut self, name: &PersonName) -> Result<Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| RolodexError::NotFound(format!("Contact '{}' not found", name)))?;
        Ok(self.records.remove(pos))
    }

    pub fn get_records(&self) -> &[Record] {
        &self.records
    }

    /// Records whose name, one of whose phones, or whose birthday (`DD.MM.YYYY`)
    /// contains `term`, ignoring case. Labels of the rendered record never match.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name().as_str().to_lowercase().contains(&term)
                    || r.phones().iter().any(|p| p.as_str().contains(&term))
                    || r.birthday().is_some_and(|b| b.to_string().contains(&term))
            })
            .collect()
    }

    pub fn birthdays_per_period(&self, period: u32) -> BTreeMap<String, Vec<String>> {
        self.birthdays_per_period_from(period, Local::now().date_naive())
    }

    /// Groups contact names by the formatted date (`"Sunday, 03 November"`) of their
    /// next birthday, keeping only those strictly fewer than `period` days from `today`.
    pub fn birthdays_per_period_from(
        &self,
        period: u32,
        today: NaiveDate,
    ) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut next = anniversary(birthday.date(), today.year());
            if next < today {
                next = anniversary(birthday.date(), today.year() + 1);
            }

            let delta = (next - today).num_days();
            if delta < i64::from(period) {
                groups
                    .entry(next.format(WINDOW_KEY_FORMAT).to_string())
                    .or_default()
                    .push(record.name().to_string());
            }
        }

        groups
    }

    pub fn from_data(data: Map<String, Value>) -> Result<Self> {
        let mut book = Self::new();
        for (_, entry) in data {
            let contact: ContactData = serde_json::from_value(entry)?;
            book.add_record(Record::try_from(contact)?);
        }
        Ok(book)
    }

    pub fn to_data(&self) -> Result<Map<String, Value>> {
        let mut data = Map::new();
        for record in &self.records {
            let contact = ContactData::from(record);
            data.insert(contact.name.clone(), serde_json::to_value(&contact)?);
        }
        Ok(data)
    }

    /// Replaces every record with the contents of the stored contacts document.
    pub fn load<S: DataStore>(&mut self, store: &S) -> Result<()> {
        let raw = store.load(Collection::Contacts)?;
        let data: Map<String, Value> = serde_json::from_value(raw)?;
        *self = Self::from_data(data)?;
        Ok(())
    }

    pub fn save<S: DataStore>(&self, store: &mut S) -> Result<()> {
        store.save(Collection::Contacts, &Value::Object(self.to_data()?))
    }

    fn position(&self, name: &PersonName) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// `date`'s month and day in `year`, falling back to 28 February for leap-day dates.
fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}
