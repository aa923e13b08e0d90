//! Day accounting: pairing punches into worked minutes and applying
//! special-day accrual.

use crate::config::Settings;
use crate::models::{DayRecord, Punch, SpecialDay};

/// Worked minutes from a day's punches.
///
/// Punches are sorted by time (stable, so ties keep insertion order), then
/// scanned left to right: each entry is paired with the first exit after it,
/// contributing `exit - entry` minutes; the scan resumes after that exit.
/// Unpaired entries and bare exits contribute nothing. Tolerant of any punch
/// sequence; the result is never negative because the list is sorted.
pub fn compute_worked_minutes(punches: &[Punch]) -> i64 {
    let mut sorted = punches.to_vec();
    sorted.sort_by_key(|p| p.minutes());

    let mut total = 0;
    let mut i = 0;
    while i < sorted.len() {
        if sorted[i].kind.is_entry() {
            if let Some(j) = (i + 1..sorted.len()).find(|&j| sorted[j].kind.is_exit()) {
                total += sorted[j].minutes() - sorted[i].minutes();
                i = j;
            }
        }
        i += 1;
    }

    total
}

/// Minutes credited by the special-day marking, independent of punches.
/// A holiday credits the full daily target; a vacation credits its stored
/// minutes, defaulting to the full daily target when unset.
pub fn special_accrual(record: &DayRecord, settings: &Settings) -> i64 {
    match record.special_day {
        Some(SpecialDay::Holiday) => settings.daily_target_minutes(),
        Some(SpecialDay::Vacation) => record
            .vacation_minutes
            .unwrap_or_else(|| settings.daily_target_minutes()),
        None => 0,
    }
}

/// Total accounted minutes for a day: worked plus accrued. A half-worked,
/// half-vacation day sums both and may exceed the daily target.
pub fn compute_day_total(record: &DayRecord, settings: &Settings) -> i64 {
    compute_worked_minutes(&record.punches) + special_accrual(record, settings)
}
