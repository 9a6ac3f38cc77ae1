//! Lenient timestamp parsing for request payloads
//!
//! Accepts RFC 3339 with an offset, and also bare `YYYY-MM-DDTHH:MM:SS[.f]`
//! values, which are read as UTC.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a timestamp, treating values without an offset as UTC.
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::<Utc>::from_str(s) {
        Ok(dt) => Ok(dt),
        Err(_) => NaiveDateTime::from_str(s).map(|naive| naive.and_utc()),
    }
}

/// `deserialize_with` helper for `Option<DateTime<Utc>>` fields.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
