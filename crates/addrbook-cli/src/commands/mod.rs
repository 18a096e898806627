use addrbook_config::AppConfig;
use anyhow::Result;
use serde::Serialize;

pub mod birthdays;
pub mod contacts;
pub mod session;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
