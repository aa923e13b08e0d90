//! Weekly aggregation: per-day breakdowns and target deltas over the
//! Monday-to-Sunday window containing a reference date.

use crate::config::Settings;
use crate::core::accounting;
use crate::models::{DaySummary, WeekSummary};
use crate::store::{self, RecordMap};
use crate::utils::date;
use chrono::NaiveDate;

/// Summary of the single day `d`. `is_today` is relative to `today`.
pub fn day_summary(
    d: NaiveDate,
    today: NaiveDate,
    map: &RecordMap,
    settings: &Settings,
) -> DaySummary {
    let day_key = date::date_key(d);
    let record = store::day_or_default(map, &day_key);
    DaySummary {
        date: d,
        worked_minutes: accounting::compute_day_total(&record, settings),
        special_day: record.special_day,
        is_today: day_key == date::date_key(today),
        day_key,
    }
}

/// Summary of the ISO week containing `reference`, which is also the day
/// flagged `is_today` (exactly one of the seven days, by construction).
pub fn compute_week_summary(
    reference: NaiveDate,
    map: &RecordMap,
    settings: &Settings,
) -> WeekSummary {
    let week_start = date::week_start(reference);

    let per_day: Vec<DaySummary> = date::week_days(week_start)
        .into_iter()
        .map(|d| day_summary(d, reference, map, settings))
        .collect();

    let total_worked_minutes: i64 = per_day.iter().map(|d| d.worked_minutes).sum();
    let weekly_target_minutes = settings.weekly_target_minutes();

    WeekSummary {
        week_start,
        total_worked_minutes,
        weekly_target_minutes,
        extra_minutes: total_worked_minutes - weekly_target_minutes,
        per_day,
    }
}
