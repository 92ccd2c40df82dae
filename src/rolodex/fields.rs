//! Validated field values shared by contacts.
//!
//! - [`PersonName`]: capitalized on every construction, used as the address book key
//! - [`PhoneNumber`]: exactly ten ASCII digits
//! - [`Birthday`]: a calendar date written as `DD.MM.YYYY`
//!
//! Values are only ever built through their validating constructors, so anything
//! holding one of these types can rely on it being well-formed.

use crate::error::{Result, RolodexError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap());

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn normalize_name(s: &str) -> PersonName {
    PersonName::new(s)
}

pub fn validate_phone(s: &str) -> Result<PhoneNumber> {
    s.parse()
}

pub fn validate_birthday(s: &str) -> Result<Birthday> {
    s.parse()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: &str) -> Self {
        Self(capitalize(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        if !PHONE_RE.is_match(s) {
            return Err(RolodexError::Validation(format!(
                "'{}' doesn't match the phone format XXXXXXXXXX (10 digits)",
                s
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        if !BIRTHDAY_RE.is_match(s) {
            return Err(RolodexError::Validation(format!(
                "'{}' doesn't match the birthday format DD.MM.YYYY",
                s
            )));
        }
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| RolodexError::Validation(format!("'{}' is not a valid calendar date", s)))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
