use serde::{Deserialize, Serialize};

/// Calendar year in which the 1st Congress convened.
pub const FIRST_CONGRESS_YEAR: u32 = 1789;

pub const DEFAULT_CONGRESS: u32 = 118;
pub const DEFAULT_SESSION: u8 = 2;

/// The user's chamber and period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub congress: u32,
    pub session: u8,
    pub include_house: bool,
    pub include_senate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            congress: DEFAULT_CONGRESS,
            session: DEFAULT_SESSION,
            include_house: true,
            include_senate: true,
        }
    }
}

/// Partially stored settings; any missing field keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredSettings {
    pub congress: Option<u32>,
    pub session: Option<u8>,
    pub include_house: Option<bool>,
    pub include_senate: Option<bool>,
}

impl StoredSettings {
    pub fn merge_over(self, defaults: Settings) -> Settings {
        Settings {
            congress: self.congress.unwrap_or(defaults.congress),
            session: self.session.unwrap_or(defaults.session),
            include_house: self.include_house.unwrap_or(defaults.include_house),
            include_senate: self.include_senate.unwrap_or(defaults.include_senate),
        }
    }
}

impl Settings {
    pub fn year(&self) -> u32 {
        year_for_congress(self.congress, self.session)
    }

    pub fn has_chamber(&self) -> bool {
        self.include_house || self.include_senate
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.congress == 0 {
            return Err("congress must be at least 1".to_string());
        }
        if !matches!(self.session, 1 | 2) {
            return Err(format!("session must be 1 or 2, received {}", self.session));
        }
        if checked_year_for_congress(self.congress, self.session).is_none() {
            return Err(format!("congress {} is out of range", self.congress));
        }
        Ok(())
    }
}

/// Maps a congress and session (1 or 2) to the calendar year it sat in.
/// Saturates at `u32::MAX`; `Settings::validate` rejects such congresses.
pub fn year_for_congress(congress: u32, session: u8) -> u32 {
    checked_year_for_congress(congress, session).unwrap_or(u32::MAX)
}

pub fn checked_year_for_congress(congress: u32, session: u8) -> Option<u32> {
    congress
        .saturating_sub(1)
        .checked_mul(2)?
        .checked_add(FIRST_CONGRESS_YEAR)?
        .checked_add(u32::from(session.saturating_sub(1)))
}
