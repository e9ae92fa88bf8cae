pub mod dto;
pub mod error;
pub mod feed;
mod helpers;
pub mod render;
pub mod service;
pub mod source;

pub use dto::{Chamber, Vote};
pub use error::FetchError;
pub use feed::{Feed, parse_house_rolls, parse_senate_menu};
pub use render::{format_vote_date, render_vote_table};
pub use service::{VoteAggregator, sort_votes};
pub use source::{HttpRelayClient, RelayBody, RelaySource};
