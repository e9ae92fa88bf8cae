pub mod dto;
pub mod store;

pub use dto::{FIRST_CONGRESS_YEAR, Settings, checked_year_for_congress, year_for_congress};
pub use store::{SETTINGS_KEY, SETTINGS_TREE, SettingsStore};
