use crate::commands::{to_json, Context};
use crate::util::expect_args;
use addrbook_core::AddressBook;
use anyhow::Result;
use chrono::NaiveDate;

pub fn add_birthday(book: &mut AddressBook, args: &[&str], today: NaiveDate) -> Result<String> {
    let [name, date] = expect_args(args, "name and birthday")?;
    book.find_mut(name)?.add_birthday_on(date, today)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = expect_args(args, "name")?;
    match book.find(name)?.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("No birthday set.".to_string()),
    }
}

pub fn upcoming(ctx: &Context<'_>, book: &AddressBook, today: NaiveDate) -> Result<String> {
    let upcoming = book.upcoming_birthdays_within(today, ctx.config.upcoming_days)?;
    if ctx.json {
        return to_json(&upcoming);
    }
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|item| format!("{}: {}", item.name, item.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n"))
}
