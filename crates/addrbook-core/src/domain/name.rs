use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;
    use crate::error::CoreError;

    #[test]
    fn name_is_trimmed() {
        let name = Name::new("  Jane Doe ").unwrap();
        assert_eq!(name.as_str(), "Jane Doe");
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(Name::new("").unwrap_err(), CoreError::EmptyName);
        assert_eq!(Name::new(" \t ").unwrap_err(), CoreError::EmptyName);
    }

    #[test]
    fn name_deserializes_through_validation() {
        let name: Name = serde_json::from_str("\" Bob \"").unwrap();
        assert_eq!(name.as_str(), "Bob");
        assert!(serde_json::from_str::<Name>("\"  \"").is_err());
    }
}
