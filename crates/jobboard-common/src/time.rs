use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{JobboardError, Result};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Stored form of `postedDate`: RFC 3339 with microseconds and an explicit offset.
pub fn format_posted_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parses a stored `postedDate`. Offset-less timestamps are taken as UTC.
pub fn parse_posted_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|err| JobboardError::InternalError(format!("invalid postedDate {value:?}: {err}")))
}
