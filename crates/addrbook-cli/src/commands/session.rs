use crate::commands::{birthdays, contacts, Context};
use crate::error::invalid_input;
use crate::util::parse_input;
use addrbook_core::time::local_today;
use addrbook_core::AddressBook;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";

// Runs until `close`, `exit` or end of input; failed commands are reported
// and the session keeps going.
pub fn run<R: BufRead, W: Write>(ctx: &Context<'_>, mut input: R, mut out: W) -> Result<()> {
    let mut book = AddressBook::new();
    writeln!(out, "{GREETING}")?;

    let mut raw = Vec::new();
    loop {
        write!(out, "{}", ctx.config.prompt)?;
        out.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(err) => {
                debug!(error = %err, "undecodable input line");
                writeln!(out, "error: Input is not valid UTF-8.")?;
                continue;
            }
        };
        let Some((command, args)) = parse_input(line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "dispatch");

        let outcome = match command.as_str() {
            "close" | "exit" => {
                writeln!(out, "{FAREWELL}")?;
                break;
            }
            "hello" => Ok("How can I help you?".to_string()),
            "add" => contacts::add_contact(&mut book, &args),
            "change" => contacts::change_contact(&mut book, &args),
            "remove-phone" => contacts::remove_phone(&mut book, &args),
            "phone" => contacts::show_phone(ctx, &book, &args),
            "all" => contacts::show_all(ctx, &book),
            "delete" => contacts::delete_contact(&mut book, &args),
            "add-birthday" => birthdays::add_birthday(&mut book, &args, local_today()),
            "show-birthday" => birthdays::show_birthday(&book, &args),
            "birthdays" => birthdays::upcoming(ctx, &book, local_today()),
            _ => Err(invalid_input("Invalid command.")),
        };

        match outcome {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => {
                debug!(command = %command, error = %err, "command failed");
                writeln!(out, "error: {err}")?;
            }
        }
    }

    debug!(records = book.len(), "session finished");
    Ok(())
}
