use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name can not be empty!")]
    EmptyName,
    #[error("Phone number must contain 10 digits")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),
    #[error("Birthday from the future is not allowed!")]
    FutureBirthday(String),
    #[error("Birthday {day:02}.{month:02} does not exist in {year}!")]
    NoOccurrence { day: u32, month: u32, year: i32 },
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
    #[error("Record with name {0} not found")]
    RecordNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidDateFormat(_)
            | CoreError::FutureBirthday(_)
            | CoreError::NoOccurrence { .. } => ErrorKind::Validation,
            CoreError::PhoneNotFound(_) | CoreError::RecordNotFound(_) => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreError, ErrorKind};

    #[test]
    fn kinds_split_validation_from_lookup() {
        assert_eq!(CoreError::EmptyName.kind(), ErrorKind::Validation);
        assert_eq!(
            CoreError::FutureBirthday("01.01.2999".to_string()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CoreError::RecordNotFound("Jane".to_string()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn not_found_messages_name_the_key() {
        let err = CoreError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number 0501234567 not found");
    }
}
