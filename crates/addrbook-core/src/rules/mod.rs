pub mod birthdays;

pub use birthdays::{next_occurrence, within_window, UPCOMING_WINDOW_DAYS};
