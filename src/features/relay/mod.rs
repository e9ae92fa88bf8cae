pub mod client;
pub mod dto;
pub mod handler;

pub use client::UpstreamClient;
pub use dto::{HouseRollsPath, RelayedResponse, SenateMenuPath};
pub use handler::{handle_healthcheck, handle_house_rolls, handle_senate_menu};
