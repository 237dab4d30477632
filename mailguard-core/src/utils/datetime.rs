//! Datetime serialization/deserialization helpers.
//!
//! The admin API stores `createdAt` as MongoDB ISO strings, while some
//! deployments return epoch numbers:
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp (s / ms) -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        TimestampOrString::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Formats a timestamp the way the console shows dates, e.g. `March 1, 2025`.
pub fn display_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
