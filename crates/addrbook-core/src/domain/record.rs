use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    // Duplicates are kept; removal drops the first match only.
    pub fn add_phone(&mut self, value: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Result<&Phone, CoreError> {
        let index = self.phone_index(value)?;
        Ok(&self.phones[index])
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<(), CoreError> {
        let index = self.phone_index(value)?;
        self.phones.remove(index);
        Ok(())
    }

    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<(), CoreError> {
        let index = self.phone_index(old_value)?;
        self.phones[index].edit(new_value)
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn add_birthday_on(&mut self, value: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse_on(value, today)?);
        Ok(())
    }

    fn phone_index(&self, value: &str) -> Result<usize, CoreError> {
        let candidate = Phone::new(value)?;
        self.phones
            .iter()
            .position(|phone| *phone == candidate)
            .ok_or_else(|| CoreError::PhoneNotFound(value.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
