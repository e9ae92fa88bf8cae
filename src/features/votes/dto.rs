use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    Senate,
    House,
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Senate => f.write_str("Senate"),
            Self::House => f.write_str("House"),
        }
    }
}

/// A single roll-call vote, normalised from either chamber's feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub chamber: Chamber,
    pub number: u32,
    /// Date as reported upstream; the House form is `action-date` + "T" + `action-time`.
    pub date: String,
    /// `date` parsed for ordering, `None` when the upstream value is unusable.
    pub timestamp: Option<NaiveDateTime>,
    pub title: String,
    pub result: String,
    pub key: String,
}
