//! SpryWare time-of-day parsing
//!
//! Vendor times look like `9:30:05.123` - the hour may be a single digit
//! and the seconds field is decimalized to millisecond precision.

use chrono::{NaiveTime, Timelike};

use crate::error::ParseError;

/// Parse a vendor `H:MM:SS.sss` string into a `NaiveTime`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, ParseError> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidTime(
            s.to_string(),
            format!("expected 3 ':' separated fields, got {}", parts.len()),
        ));
    }

    let hour: u32 = parts[0]
        .parse()
        .map_err(|e: std::num::ParseIntError| ParseError::InvalidTime(s.to_string(), e.to_string()))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|e: std::num::ParseIntError| ParseError::InvalidTime(s.to_string(), e.to_string()))?;

    // Seconds are decimalized by the vendor ("05.123")
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|e: std::num::ParseFloatError| ParseError::InvalidTime(s.to_string(), e.to_string()))?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(ParseError::InvalidTime(
            s.to_string(),
            format!("seconds out of range: {}", seconds),
        ));
    }
    let whole = seconds.trunc() as u32;
    let milli = ((seconds - seconds.trunc()) * 1000.0).round() as u32;

    NaiveTime::from_hms_milli_opt(hour, minute, whole, milli.min(999)).ok_or_else(|| {
        ParseError::InvalidTime(s.to_string(), "hour or minute out of range".to_string())
    })
}

/// Seconds since the day began, with millisecond precision.
///
/// A single float sorts and plots directly (the vendor never spans days).
pub fn seconds_since_midnight(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 + f64::from(t.nanosecond()) / 1e9
}

/// Format seconds-since-midnight back into `H:MM:SS` for axis labels.
pub fn format_seconds(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hour = total / 3600;
    let minute = (total % 3600) / 60;
    let second = total % 60;
    format!("{}:{:02}:{:02}", hour, minute, second)
}
