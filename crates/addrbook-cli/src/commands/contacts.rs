use crate::commands::{to_json, Context};
use crate::util::expect_args;
use addrbook_core::{AddressBook, Phone, Record};
use anyhow::Result;
use tracing::debug;

pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, phone] = expect_args(args, "name and phone")?;
    if book.contains(name) {
        book.find_mut(name)?.add_phone(phone)?;
        debug!(contact = name, "phone appended");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    debug!(contact = name, "record created");
    Ok("Contact added.".to_string())
}

pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, old_phone, new_phone] = expect_args(args, "name, old phone and new phone")?;
    book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, phone] = expect_args(args, "name and phone")?;
    book.find_mut(name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

pub fn show_phone(ctx: &Context<'_>, book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = expect_args(args, "name")?;
    let phones = book.find(name)?.phones();
    if ctx.json {
        return to_json(&phones);
    }
    if phones.is_empty() {
        return Ok("No phones saved.".to_string());
    }
    Ok(phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; "))
}

pub fn show_all(ctx: &Context<'_>, book: &AddressBook) -> Result<String> {
    if ctx.json {
        return to_json(book);
    }
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name] = expect_args(args, "name")?;
    book.delete(name)?;
    debug!(contact = name, "record deleted");
    Ok("Contact deleted.".to_string())
}
