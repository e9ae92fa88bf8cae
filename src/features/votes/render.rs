use std::fmt::Write;

use chrono::{NaiveDateTime, Timelike};

use crate::features::votes::dto::Vote;

const UNKNOWN_DATE: &str = "Unknown date";

/// Human-readable vote date. Midnight is treated as "no time reported".
pub fn format_vote_date(vote: &Vote) -> String {
    match vote.timestamp {
        Some(timestamp) if is_midnight(&timestamp) => {
            timestamp.format("%b %-d, %Y").to_string()
        }
        Some(timestamp) => timestamp.format("%b %-d, %Y %-I:%M %p").to_string(),
        None if vote.date.trim_matches('T').is_empty() => UNKNOWN_DATE.to_string(),
        None => vote.date.clone(),
    }
}

fn is_midnight(timestamp: &NaiveDateTime) -> bool {
    timestamp.hour() == 0 && timestamp.minute() == 0 && timestamp.second() == 0
}

pub fn render_vote_table(votes: &[Vote]) -> String {
    if votes.is_empty() {
        return "No votes found.\n".to_string();
    }

    let mut output = String::new();
    for vote in votes {
        let _ = writeln!(
            output,
            "{:<6} #{:<4} {:<22} {:<28} {}",
            vote.chamber.to_string(),
            vote.number,
            format_vote_date(vote),
            vote.result,
            vote.title
        );
    }
    output
}
