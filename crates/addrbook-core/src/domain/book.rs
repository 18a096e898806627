use crate::domain::Record;
use crate::dto::UpcomingBirthday;
use crate::error::CoreError;
use crate::rules::birthdays::{next_occurrence, within_window, UPCOMING_WINDOW_DAYS};
use crate::time::{format_date, local_today};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.records
            .get(name)
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn upcoming_birthdays(&self) -> Result<Vec<UpcomingBirthday>, CoreError> {
        self.upcoming_birthdays_on(local_today())
    }

    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<UpcomingBirthday>, CoreError> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Result<Vec<UpcomingBirthday>, CoreError> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let next = next_occurrence(birthday.date(), today)?;
            if within_window(next, today, window_days) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: format_date(next),
                });
            }
        }
        Ok(upcoming)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::Record;
    use crate::dto::UpcomingBirthday;
    use crate::error::{CoreError, ErrorKind};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_birthday(name: &str, birthday: &str, today: NaiveDate) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_birthday_on(birthday, today).unwrap();
        record
    }

    #[test]
    fn find_returns_added_record() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Jane").unwrap();
        record.add_phone("0501234567").unwrap();
        book.add_record(record.clone());
        assert_eq!(book.find("Jane").unwrap(), &record);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn find_is_exact_match() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane").unwrap());
        assert_eq!(
            book.find("jane").unwrap_err(),
            CoreError::RecordNotFound("jane".to_string())
        );
    }

    #[test]
    fn find_mut_changes_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane").unwrap());
        book.find_mut("Jane").unwrap().add_phone("0501234567").unwrap();
        assert_eq!(book.find("Jane").unwrap().phones().len(), 1);
    }

    #[test]
    fn delete_then_find_is_not_found() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane").unwrap());
        let removed = book.delete("Jane").unwrap();
        assert_eq!(removed.name().as_str(), "Jane");
        assert_eq!(book.find("Jane").unwrap_err().kind(), ErrorKind::NotFound);
        assert!(book.is_empty());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        let err = book.delete("Ghost").unwrap_err();
        assert_eq!(err, CoreError::RecordNotFound("Ghost".to_string()));
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C"] {
            book.add_record(Record::new(name).unwrap());
        }
        book.delete("B").unwrap();
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        let mut first = Record::new("Jane").unwrap();
        first.add_phone("0501234567").unwrap();
        let mut second = Record::new("Jane").unwrap();
        second.add_phone("0671112233").unwrap();
        book.add_record(first);
        book.add_record(second.clone());
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Jane").unwrap(), &second);
    }

    #[test]
    fn upcoming_rolls_into_next_year() {
        let today = date(2024, 12, 28);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Jane", "01.01.2000", today));
        let upcoming = book.upcoming_birthdays_on(today).unwrap();
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Jane".to_string(),
                congratulation_date: "01.01.2025".to_string(),
            }]
        );
    }

    #[test]
    fn upcoming_includes_birthday_today() {
        let today = date(2024, 5, 17);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Bob", "17.05.1980", today));
        let upcoming = book.upcoming_birthdays_on(today).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, "17.05.2024");
    }

    #[test]
    fn upcoming_skips_records_without_birthday_and_outside_window() {
        let today = date(2024, 5, 17);
        let mut book = AddressBook::new();
        book.add_record(Record::new("NoDate").unwrap());
        book.add_record(record_with_birthday("Later", "25.05.1990", today));
        book.add_record(record_with_birthday("Yesterday", "16.05.1990", today));
        book.add_record(record_with_birthday("Edge", "24.05.1990", today));
        let upcoming = book.upcoming_birthdays_on(today).unwrap();
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Edge"]);
    }

    #[test]
    fn upcoming_follows_insertion_order() {
        let today = date(2024, 5, 17);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Zed", "20.05.1990", today));
        book.add_record(record_with_birthday("Amy", "18.05.1990", today));
        let upcoming = book.upcoming_birthdays_on(today).unwrap();
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn upcoming_within_custom_window() {
        let today = date(2024, 5, 17);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Later", "30.05.1990", today));
        assert!(book.upcoming_birthdays_on(today).unwrap().is_empty());
        assert_eq!(book.upcoming_birthdays_within(today, 14).unwrap().len(), 1);
    }

    #[test]
    fn upcoming_reports_leap_day_in_common_year() {
        let today = date(2023, 2, 25);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Leap", "29.02.2020", today));
        let err = book.upcoming_birthdays_on(today).unwrap_err();
        assert!(matches!(err, CoreError::NoOccurrence { year: 2023, .. }));
    }

    #[test]
    fn serializes_as_record_list() {
        let today = date(2024, 5, 17);
        let mut book = AddressBook::new();
        let mut record = record_with_birthday("Jane", "01.01.2000", today);
        record.add_phone("0501234567").unwrap();
        book.add_record(record);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json[0]["name"], "Jane");
        assert_eq!(json[0]["phones"][0], "0501234567");
        assert_eq!(json[0]["birthday"], "01.01.2000");

        let restored: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(restored, book);
    }
}
