use crate::error::{Result, RolodexError};
use crate::fields::{Birthday, PersonName, PhoneNumber};
use std::fmt;

/// One contact: a name, an ordered list of distinct phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: PersonName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(name: PersonName, phone: PhoneNumber) -> Self {
        let mut record = Self::new(name);
        record.phones.push(phone);
        record
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn get_phones(&self) -> Vec<&str> {
        self.phones.iter().map(PhoneNumber::as_str).collect()
    }

    pub fn has_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Appends `phone` unless it is already present. Returns whether it was added.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> bool {
        if self.has_phone(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Removes the first phone equal to `phone`. Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Overwrites `old` with `new` in place, keeping its position.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| phone_not_found(old))?;

        if old != &new && self.has_phone(&new) {
            return Err(RolodexError::Duplicate(format!(
                "Phone '{}' already exists for {}",
                new, self.name
            )));
        }

        self.phones[pos] = new;
        Ok(())
    }

    pub fn find_phone(&self, phone: &PhoneNumber) -> Result<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| *p == phone)
            .ok_or_else(|| phone_not_found(phone))
    }

    /// Sets the birthday, returning the one it replaced.
    pub fn add_birthday(&mut self, birthday: Birthday) -> Option<Birthday> {
        self.birthday.replace(birthday)
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

fn phone_not_found(phone: &PhoneNumber) -> RolodexError {
    RolodexError::NotFound(format!("Phone '{}' not found in the record", phone))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, phones: {}",
            self.name,
            self.get_phones().join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        s.parse().unwrap()
    }

    fn john() -> Record {
        Record::with_phone(PersonName::new("john"), phone("0987683542"))
    }

    #[test]
    fn add_phone_keeps_order_and_skips_duplicates() {
        let mut record = john();
        assert!(record.add_phone(phone("5555555555")));
        assert_eq!(record.get_phones(), vec!["0987683542", "5555555555"]);

        assert!(!record.add_phone(phone("5555555555")));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_is_silent_when_absent() {
        let mut record = john();
        assert!(!record.remove_phone(&phone("1112223333")));
        assert!(record.remove_phone(&phone("0987683542")));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn edit_phone_preserves_position() {
        let mut record = john();
        record.add_phone(phone("5555555555"));
        record
            .edit_phone(&phone("0987683542"), phone("1112223333"))
            .unwrap();
        assert_eq!(record.get_phones(), vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn edit_missing_phone_fails() {
        let mut record = john();
        let err = record
            .edit_phone(&phone("1112223333"), phone("4445556666"))
            .unwrap_err();
        assert!(matches!(err, RolodexError::NotFound(_)));
        assert_eq!(record.get_phones(), vec!["0987683542"]);
    }

    #[test]
    fn edit_phone_to_existing_number_fails() {
        let mut record = john();
        record.add_phone(phone("5555555555"));
        let err = record
            .edit_phone(&phone("0987683542"), phone("5555555555"))
            .unwrap_err();
        assert!(matches!(err, RolodexError::Duplicate(_)));
    }

    #[test]
    fn find_phone() {
        let record = john();
        assert_eq!(
            record.find_phone(&phone("0987683542")).unwrap().as_str(),
            "0987683542"
        );
        assert!(matches!(
            record.find_phone(&phone("5555555555")),
            Err(RolodexError::NotFound(_))
        ));
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut record = john();
        assert!(record.add_birthday("03.11.1984".parse().unwrap()).is_none());
        let previous = record.add_birthday("04.11.1984".parse().unwrap());
        assert_eq!(previous.unwrap().to_string(), "03.11.1984");
        assert_eq!(record.birthday().unwrap().to_string(), "04.11.1984");
    }

    #[test]
    fn renders_with_and_without_birthday() {
        let mut record = john();
        record.add_phone(phone("5555555555"));
        assert_eq!(
            record.to_string(),
            "Name: John, phones: 0987683542; 5555555555"
        );
        record.add_birthday("03.11.1984".parse().unwrap());
        assert_eq!(
            record.to_string(),
            "Name: John, phones: 0987683542; 5555555555, birthday: 03.11.1984"
        );
    }
}
