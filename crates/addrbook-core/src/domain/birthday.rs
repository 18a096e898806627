use crate::error::CoreError;
use crate::time::{format_date, local_today, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Self::parse_on(raw, local_today())
    }

    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let date = parse_date(raw).ok_or_else(|| CoreError::InvalidDateFormat(raw.to_string()))?;
        if date > today {
            return Err(CoreError::FutureBirthday(raw.trim().to_string()));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}
