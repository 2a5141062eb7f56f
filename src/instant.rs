use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Also accepts single-digit hours, as sent by the server for event starts.
const OFFSET_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date as written by the server or by a date input.
/// Dates carrying an offset are converted to UTC, naive ones are taken as UTC.
/// A date without time stands for midnight.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.naive_utc());
    }
    if let Ok(date_time) = DateTime::parse_from_str(value, OFFSET_DATE_TIME_FORMAT) {
        return Ok(date_time.naive_utc());
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date_time);
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| Error::UnparsableInstant(value.to_owned()))
}

/// Same as [`parse_instant`], but an unparsable value becomes an unknown instant.
pub fn parse_optional_instant(value: &str) -> Option<NaiveDateTime> {
    parse_instant(value)
        .inspect_err(|error| debug!("{error}"))
        .ok()
}

/// Strict comparison between two possibly unknown instants.
/// Anything compared to an unknown instant is never before it, nor after it.
pub fn is_before(instant: Option<&NaiveDateTime>, other: Option<&NaiveDateTime>) -> bool {
    match (instant, other) {
        (Some(instant), Some(other)) => instant < other,
        _ => false,
    }
}
