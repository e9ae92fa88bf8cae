use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roxmltree::Node;
use serde_json::Value;

pub(super) const SNIPPET_CHARS: usize = 180;
pub(super) const MISSING_TALLY: &str = "?";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%b-%YT%H:%M",
    "%d-%b-%YT%I:%M %p",
    "%B %d, %Y, %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%B %d, %Y"];

pub(super) fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

pub(super) fn value_to_string(value: Option<&Value>) -> Option<String> {
    value.and_then(|item| {
        if let Some(text) = item.as_str() {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        } else if let Some(number) = item.as_i64() {
            Some(number.to_string())
        } else if let Some(number) = item.as_u64() {
            Some(number.to_string())
        } else {
            item.as_f64().map(format_float)
        }
    })
}

fn format_float(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{number:.0}")
    } else {
        number.to_string()
    }
}

pub(super) fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub(super) fn parse_roll_number(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

/// Parses the date layouts both feeds are known to use. Values carrying an
/// offset are compared in UTC; everything else is taken as reported.
pub(super) fn parse_vote_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_iso_date_and_time_without_seconds() {
        let parsed = parse_vote_timestamp("2024-03-02T14:00").expect("parsed");
        assert_eq!(parsed.to_string(), "2024-03-02 14:00:00");
    }

    #[test]
    fn parses_date_only_as_midnight() {
        let parsed = parse_vote_timestamp("2024-03-01").expect("parsed");
        assert_eq!(parsed.to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn parses_clerk_style_dates() {
        let parsed = parse_vote_timestamp("2-Mar-2024T2:05 PM").expect("parsed");
        assert_eq!(parsed.to_string(), "2024-03-02 14:05:00");
    }

    #[test]
    fn parses_offsets_into_utc() {
        let parsed = parse_vote_timestamp("2024-03-02T14:00:00-05:00").expect("parsed");
        assert_eq!(parsed.to_string(), "2024-03-02 19:00:00");
    }

    #[test]
    fn rejects_partial_values() {
        assert!(parse_vote_timestamp("T14:00").is_none());
        assert!(parse_vote_timestamp("").is_none());
        assert!(parse_vote_timestamp("soon").is_none());
    }

    #[test]
    fn value_to_string_accepts_numbers_and_strings() {
        assert_eq!(value_to_string(Some(&json!(60))), Some("60".to_string()));
        assert_eq!(value_to_string(Some(&json!(" 40 "))), Some("40".to_string()));
        assert_eq!(value_to_string(Some(&json!(60.0))), Some("60".to_string()));
        assert_eq!(value_to_string(Some(&json!(12.5))), Some("12.5".to_string()));
        assert_eq!(value_to_string(Some(&json!(true))), None);
        assert_eq!(value_to_string(Some(&json!(""))), None);
        assert_eq!(value_to_string(None), None);
    }

    #[test]
    fn snippet_is_bounded() {
        let body = "x".repeat(500);
        assert_eq!(snippet(&body).len(), SNIPPET_CHARS);
        assert_eq!(snippet("short"), "short");
    }
}
