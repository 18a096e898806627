use crate::error::invalid_input;
use anyhow::Result;

/// Splits a line into a lowercased command keyword and its arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

pub fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| invalid_input(format!("Give me {usage} please.")))
}
