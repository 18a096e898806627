use crate::error::CoreError;
use chrono::{Datelike, Days, NaiveDate};

pub const UPCOMING_WINDOW_DAYS: u32 = 7;

pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    let this_year = in_year(birthday, today.year())?;
    if this_year < today {
        return in_year(birthday, today.year() + 1);
    }
    Ok(this_year)
}

pub fn within_window(date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    let end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    today <= date && date <= end
}

// Feb 29 has no counterpart in common years; that is reported, not shifted.
fn in_year(date: NaiveDate, year: i32) -> Result<NaiveDate, CoreError> {
    date.with_year(year).ok_or(CoreError::NoOccurrence {
        day: date.day(),
        month: date.month(),
        year,
    })
}
