//! Lenient accessors over a raw SWAPI JSON object.
//!
//! A missing key or a value of the wrong JSON type yields the caller's
//! default; none of these ever fail.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

pub(crate) fn string_field(json: &Value, key: &str, default: &str) -> String {
    match json.get(key) {
        Some(Value::String(s)) => s.clone(),
        // SWAPI is inconsistent about quoting numbers
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

pub(crate) fn u32_field(json: &Value, key: &str, default: u32) -> u32 {
    match json.get(key) {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Cross-reference URLs. Non-string entries are skipped.
pub(crate) fn url_list(json: &Value, key: &str) -> Vec<String> {
    json.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
