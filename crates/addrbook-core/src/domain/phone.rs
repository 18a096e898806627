use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !Self::is_valid(raw) {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.trim().to_string()))
    }

    // Raw input, untrimmed: surrounding whitespace fails.
    pub fn is_valid(candidate: &str) -> bool {
        PHONE_RE.is_match(candidate)
    }

    pub fn edit(&mut self, new_value: &str) -> Result<(), CoreError> {
        if !Self::is_valid(new_value) {
            return Err(CoreError::InvalidPhone(new_value.to_string()));
        }
        self.0 = new_value.trim().to_string();
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
