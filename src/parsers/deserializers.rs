use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::Timestamp;

/// Naive layouts accepted when a timestamp string carries no offset
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Custom deserializer for timestamps that accepts integers (ms) and ISO-8601 strings
///
/// Unlike a strict deserializer, anything unparseable becomes `None` instead of
/// failing the surrounding record.
pub fn deserialize_lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(timestamp_from_value(&value))
}

/// Custom deserializer for identifiers and labels: empty or non-string values become `None`
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

pub fn timestamp_from_value(value: &Value) -> Option<Timestamp> {
    match value {
        Value::Number(n) => {
            // Assume it's a Unix timestamp in milliseconds
            let ms = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            timestamp_from_millis(ms)
        }
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

/// Millisecond epoch to a UTC timestamp; zero and negative values count as unset
pub fn timestamp_from_millis(ms: i64) -> Option<Timestamp> {
    if ms <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.fixed_offset())
}

/// Parse an ISO-8601 string, keeping the offset it was written with
///
/// Strings without an offset are read as naive wall-clock time at offset zero.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}
