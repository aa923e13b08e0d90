//! Time utilities: parsing HH:MM, minute conversions, and the serde codec
//! used to persist punch times as "HH:MM" strings.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

fn time_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap())
}

/// Parse "HH:MM" into minutes since midnight.
/// Rejects anything that does not match `\d{1,2}:\d{2}` or whose hour/minute
/// fall outside 0-23 / 0-59.
pub fn time_to_minutes(s: &str) -> AppResult<i64> {
    if !time_shape().is_match(s) {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    let (h, m) = s.split_once(':').ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let hours: i64 = h.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: i64 = m.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;

    if hours > 23 || minutes > 59 {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Split a minute count into (hours, minutes).
/// Total over all integers; callers format negative values via abs() plus an
/// explicit sign.
pub fn minutes_to_time(total: i64) -> (i64, i64) {
    (total / 60, total % 60)
}

pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    let mins = time_to_minutes(s)?;
    NaiveTime::from_hms_opt((mins / 60) as u32, (mins % 60) as u32, 0)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Minutes since midnight for a wall-clock time. Seconds are ignored;
/// the whole data model is minute-precision.
pub fn minutes_of(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Current local wall-clock time, truncated to the minute.
pub fn now_time() -> NaiveTime {
    let now = chrono::Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// Serde codec persisting a NaiveTime as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        super::parse_time(&s).map_err(|e| D::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(time_to_minutes("09:00").unwrap(), 540);
        assert_eq!(time_to_minutes("9:05").unwrap(), 545);
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "9", "9:5", "24:00", "12:60", "ab:cd", "12:00:00", "-1:00"] {
            assert!(time_to_minutes(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn minutes_round_trip() {
        for s in ["00:00", "07:30", "12:01", "23:59"] {
            let mins = time_to_minutes(s).unwrap();
            let (h, m) = minutes_to_time(mins);
            let reparsed: Vec<i64> = s.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!((h, m), (reparsed[0], reparsed[1]));
        }
    }

    #[test]
    fn minutes_to_time_is_total() {
        assert_eq!(minutes_to_time(450), (7, 30));
        assert_eq!(minutes_to_time(0), (0, 0));
        // negative inputs must not trap; callers abs() before formatting
        let _ = minutes_to_time(-90);
    }
}
