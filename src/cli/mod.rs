pub mod commands;
pub mod parser;

use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};

/// Resolve an optional `--date` argument; absent means today.
pub fn resolve_date(arg: Option<&String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

/// Resolve an optional `--time` argument; absent means the current minute.
pub fn resolve_time(arg: Option<&String>) -> AppResult<NaiveTime> {
    match arg {
        Some(s) => time::parse_time(s),
        None => Ok(time::now_time()),
    }
}
