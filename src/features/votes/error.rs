use thiserror::Error;

use crate::features::votes::dto::Chamber;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Please select at least one chamber (Senate or House).")]
    NoChamberSelected,
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("{chamber} request failed: {message}")]
    Network { chamber: Chamber, message: String },
    #[error("{chamber} request failed with status {status}: {snippet}")]
    Status {
        chamber: Chamber,
        status: u16,
        snippet: String,
    },
    #[error("{chamber} response was not valid JSON ({message}): {snippet}")]
    InvalidJson {
        chamber: Chamber,
        message: String,
        snippet: String,
    },
    #[error("{chamber} response was not valid XML: {message}")]
    InvalidXml { chamber: Chamber, message: String },
}

impl FetchError {
    pub fn chamber(&self) -> Option<Chamber> {
        match self {
            Self::NoChamberSelected | Self::InvalidSettings(_) => None,
            Self::Network { chamber, .. }
            | Self::Status { chamber, .. }
            | Self::InvalidJson { chamber, .. }
            | Self::InvalidXml { chamber, .. } => Some(*chamber),
        }
    }
}
