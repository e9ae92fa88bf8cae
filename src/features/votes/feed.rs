use roxmltree::{Document, Node, ParsingOptions};
use serde_json::Value;
use tracing::warn;

use crate::features::settings::Settings;
use crate::features::votes::dto::{Chamber, Vote};
use crate::features::votes::error::FetchError;
use crate::features::votes::helpers::{
    MISSING_TALLY, child_text, parse_roll_number, parse_vote_timestamp, snippet, value_to_string,
};

/// A chamber's roll-call listing for one period, as served by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Senate { congress: u32, session: u8 },
    House { year: u32 },
}

impl Feed {
    /// Feeds selected by `settings`, Senate first.
    pub fn for_settings(settings: &Settings) -> Vec<Self> {
        let mut feeds = Vec::with_capacity(2);
        if settings.include_senate {
            feeds.push(Self::Senate {
                congress: settings.congress,
                session: settings.session,
            });
        }
        if settings.include_house {
            feeds.push(Self::House {
                year: settings.year(),
            });
        }
        feeds
    }

    pub fn chamber(&self) -> Chamber {
        match self {
            Self::Senate { .. } => Chamber::Senate,
            Self::House { .. } => Chamber::House,
        }
    }

    pub fn relay_path(&self) -> String {
        match self {
            Self::Senate { congress, session } => format!("/api/senate/{congress}/{session}"),
            Self::House { year } => format!("/api/house/{year}"),
        }
    }

    pub fn parse(&self, body: &str) -> Result<Vec<Vote>, FetchError> {
        match *self {
            Self::Senate { congress, session } => parse_senate_menu(body, congress, session),
            Self::House { year } => parse_house_rolls(body, year),
        }
    }
}

/// Maps a Senate `vote_menu` JSON document into votes. A body that is not
/// JSON is an error; a JSON body without a `roll_calls.roll_call` list yields
/// no votes.
pub fn parse_senate_menu(body: &str, congress: u32, session: u8) -> Result<Vec<Vote>, FetchError> {
    let payload: Value = serde_json::from_str(body).map_err(|err| FetchError::InvalidJson {
        chamber: Chamber::Senate,
        message: err.to_string(),
        snippet: snippet(body),
    })?;

    let records: Vec<&Value> = match payload
        .get("roll_calls")
        .and_then(|roll_calls| roll_calls.get("roll_call"))
    {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(item @ Value::Object(_)) => vec![item],
        _ => {
            warn!(target: "votes", congress, session, "senate menu has no roll_calls.roll_call list");
            return Ok(Vec::new());
        }
    };

    Ok(records
        .into_iter()
        .filter_map(|record| map_senate_record(record, congress, session))
        .collect())
}

fn map_senate_record(record: &Value, congress: u32, session: u8) -> Option<Vote> {
    let Some(number) = value_to_string(record.get("vote_number"))
        .as_deref()
        .and_then(parse_roll_number)
    else {
        warn!(target: "votes", congress, session, "skipping senate roll call without a vote number");
        return None;
    };

    let date = value_to_string(record.get("vote_date")).unwrap_or_default();
    let issue = value_to_string(record.get("issue")).unwrap_or_default();
    let question = value_to_string(record.get("question")).unwrap_or_default();
    let outcome = value_to_string(record.get("result")).unwrap_or_default();
    let counts = record.get("counts");
    let yea = value_to_string(counts.and_then(|counts| counts.get("Yea")))
        .unwrap_or_else(|| MISSING_TALLY.to_string());
    let nay = value_to_string(counts.and_then(|counts| counts.get("Nay")))
        .unwrap_or_else(|| MISSING_TALLY.to_string());

    Some(Vote {
        chamber: Chamber::Senate,
        number,
        timestamp: parse_vote_timestamp(&date),
        date,
        title: format!("{issue}: {question}"),
        result: format!("{outcome} ({yea}-{nay})"),
        key: format!("s-{congress}-{session}-{number}"),
    })
}

/// Maps a House `ROLLS.xml` document into votes, one per `rollcall-vote`
/// element. Malformed XML is an error.
pub fn parse_house_rolls(body: &str, year: u32) -> Result<Vec<Vote>, FetchError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document =
        Document::parse_with_options(body, options).map_err(|err| FetchError::InvalidXml {
            chamber: Chamber::House,
            message: err.to_string(),
        })?;

    Ok(document
        .descendants()
        .filter(|node| node.has_tag_name("rollcall-vote"))
        .filter_map(|node| map_house_record(node, year))
        .collect())
}

fn map_house_record(node: Node<'_, '_>, year: u32) -> Option<Vote> {
    let Some(number) = child_text(node, "rollcall-num")
        .as_deref()
        .and_then(parse_roll_number)
    else {
        warn!(target: "votes", year, "skipping house roll call without a roll number");
        return None;
    };

    let action_date = child_text(node, "action-date");
    let action_time = child_text(node, "action-time");
    let date = format!(
        "{}T{}",
        action_date.as_deref().unwrap_or_default(),
        action_time.as_deref().unwrap_or_default()
    );
    let timestamp = house_timestamp(node, action_date.as_deref(), action_time.as_deref());
    if timestamp.is_none() {
        warn!(target: "votes", year, number, date = %date, "house roll call has an unusable date");
    }

    let totals = node
        .children()
        .find(|child| child.has_tag_name("totals-by-vote"));
    let yea = totals
        .and_then(|totals| child_text(totals, "yea-total"))
        .unwrap_or_else(|| MISSING_TALLY.to_string());
    let nay = totals
        .and_then(|totals| child_text(totals, "nay-total"))
        .unwrap_or_else(|| MISSING_TALLY.to_string());
    let outcome = child_text(node, "vote-result").unwrap_or_default();

    Some(Vote {
        chamber: Chamber::House,
        number,
        date,
        timestamp,
        title: child_text(node, "vote-question").unwrap_or_else(|| "N/A".to_string()),
        result: format!("{outcome} ({yea}-{nay})"),
        key: format!("h-{year}-{number}"),
    })
}

fn house_timestamp(
    node: Node<'_, '_>,
    action_date: Option<&str>,
    action_time: Option<&str>,
) -> Option<chrono::NaiveDateTime> {
    let action_date = action_date?;

    // The clerk publishes a 24-hour Eastern time alongside the display time.
    let time_etz = node
        .children()
        .find(|child| child.has_tag_name("action-time"))
        .and_then(|child| child.attribute("time-etz"))
        .map(str::trim)
        .filter(|value| !value.is_empty());

    time_etz
        .or(action_time)
        .and_then(|time| parse_vote_timestamp(&format!("{action_date}T{time}")))
        .or_else(|| parse_vote_timestamp(action_date))
}
