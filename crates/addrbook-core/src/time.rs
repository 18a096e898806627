use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_LAYOUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("date layout compiles"));

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    // chrono alone tolerates inner spaces, signs and short years.
    if !DATE_LAYOUT_RE.is_match(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
