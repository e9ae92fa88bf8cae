pub mod dto;
pub mod loader;

pub use dto::{AppConfig, ClientConfig, UpstreamConfig};
pub use loader::{load_client_config, load_config};
