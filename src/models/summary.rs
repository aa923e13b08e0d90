use super::day_record::SpecialDay;
use chrono::NaiveDate;

/// Derived view of one day; never persisted, recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub day_key: String,
    pub worked_minutes: i64,
    pub special_day: Option<SpecialDay>,
    pub is_today: bool,
}

/// Derived view of a Monday-to-Sunday window around a reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub total_worked_minutes: i64,
    pub weekly_target_minutes: i64,
    /// Signed: positive is surplus, negative deficit, zero exact.
    pub extra_minutes: i64,
    pub per_day: Vec<DaySummary>,
}
