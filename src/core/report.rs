//! Full historical report: per-week summary rows, grand totals and per-day
//! detail rows over every stored date. Pure function of the store and the
//! settings; same input gives byte-identical output.

use crate::config::Settings;
use crate::core::accounting;
use crate::models::{DayRecord, PunchKind, SpecialDay};
use crate::store::{self, RecordMap};
use crate::utils::date;
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStatus {
    Surplus,
    Deficit,
    Complete,
}

impl WeekStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Surplus => "surplus",
            WeekStatus::Deficit => "deficit",
            WeekStatus::Complete => "complete",
        }
    }

    fn from_extra(extra: i64) -> Self {
        match extra {
            e if e > 0 => WeekStatus::Surplus,
            e if e < 0 => WeekStatus::Deficit,
            _ => WeekStatus::Complete,
        }
    }
}

/// How a day is classified in the detail section. Punches and a special-day
/// marking can coexist; the combined forms make that visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Normal,
    Vacation,
    Holiday,
    WorkedVacation,
    WorkedHoliday,
}

impl DayClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayClass::Normal => "Normal",
            DayClass::Vacation => "Vacation",
            DayClass::Holiday => "Holiday",
            DayClass::WorkedVacation => "Normal+Vacation",
            DayClass::WorkedHoliday => "Normal+Holiday",
        }
    }

    fn of(record: &DayRecord) -> Self {
        match (record.special_day, record.punches.is_empty()) {
            (None, _) => DayClass::Normal,
            (Some(SpecialDay::Vacation), true) => DayClass::Vacation,
            (Some(SpecialDay::Holiday), true) => DayClass::Holiday,
            (Some(SpecialDay::Vacation), false) => DayClass::WorkedVacation,
            (Some(SpecialDay::Holiday), false) => DayClass::WorkedHoliday,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub week_number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub worked_minutes: i64,
    pub target_minutes: i64,
    pub extra_minutes: i64,
    pub status: WeekStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub class: DayClass,
    /// Entry times in chronological order, "HH:MM".
    pub entries: Vec<String>,
    /// Exit times in chronological order, "HH:MM".
    pub exits: Vec<String>,
    pub worked_minutes: i64,
    pub accrued_minutes: i64,
    pub total_minutes: i64,
    pub target_minutes: i64,
    pub diff_minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub daily_target_minutes: i64,
    pub weekly_target_minutes: i64,
    pub weeks: Vec<WeekRow>,
    pub total_worked_minutes: i64,
    pub total_extra_minutes: i64,
    pub days: Vec<DayRow>,
}

/// Build the report over every stored date. Date keys were validated at
/// load time, so unparseable keys cannot occur here.
pub fn generate_report(map: &RecordMap, settings: &Settings) -> Report {
    let daily_target = settings.daily_target_minutes();
    let weekly_target = settings.weekly_target_minutes();

    // Group stored dates into the weeks they fall in.
    let week_starts: BTreeSet<NaiveDate> = map
        .keys()
        .filter_map(|k| date::parse_date(k))
        .map(date::week_start)
        .collect();

    let mut weeks = Vec::with_capacity(week_starts.len());
    let mut total_worked_minutes = 0;
    let mut total_extra_minutes = 0;

    for start in week_starts {
        let worked: i64 = date::week_days(start)
            .into_iter()
            .map(|d| {
                let record = store::day_or_default(map, &date::date_key(d));
                accounting::compute_day_total(&record, settings)
            })
            .sum();
        let extra = worked - weekly_target;
        total_worked_minutes += worked;
        total_extra_minutes += extra;

        weeks.push(WeekRow {
            week_number: date::week_number(start),
            start,
            end: date::week_days(start)[6],
            worked_minutes: worked,
            target_minutes: weekly_target,
            extra_minutes: extra,
            status: WeekStatus::from_extra(extra),
        });
    }

    let days = map
        .iter()
        .filter_map(|(key, record)| {
            let d = date::parse_date(key)?;
            let sorted = record.sorted_punches();
            let worked = accounting::compute_worked_minutes(&record.punches);
            let accrued = accounting::special_accrual(record, settings);
            let total = worked + accrued;

            Some(DayRow {
                date: d,
                weekday: date::weekday_name(d),
                class: DayClass::of(record),
                entries: sorted
                    .iter()
                    .filter(|p| p.kind == PunchKind::Entry)
                    .map(|p| p.time_str())
                    .collect(),
                exits: sorted
                    .iter()
                    .filter(|p| p.kind == PunchKind::Exit)
                    .map(|p| p.time_str())
                    .collect(),
                worked_minutes: worked,
                accrued_minutes: accrued,
                total_minutes: total,
                target_minutes: daily_target,
                diff_minutes: total - daily_target,
            })
        })
        .collect();

    Report {
        daily_target_minutes: daily_target,
        weekly_target_minutes: weekly_target,
        weeks,
        total_worked_minutes,
        total_extra_minutes,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;
    use crate::utils::time::parse_time;

    fn worked_day(times: &[(PunchKind, &str)]) -> DayRecord {
        let mut rec = DayRecord::default();
        for (kind, t) in times {
            rec.add_punch(*kind, parse_time(t).unwrap());
        }
        rec
    }

    fn sample_map() -> RecordMap {
        let mut map = RecordMap::new();
        map.insert(
            "2025-03-10".into(),
            worked_day(&[
                (PunchKind::Entry, "09:00"),
                (PunchKind::Exit, "12:00"),
                (PunchKind::Entry, "13:00"),
                (PunchKind::Exit, "18:00"),
            ]),
        );
        let mut vac = DayRecord::default();
        vac.set_special(SpecialDay::Vacation, Some(200), 450);
        map.insert("2025-03-11".into(), vac);
        // next ISO week
        map.insert(
            "2025-03-17".into(),
            worked_day(&[(PunchKind::Entry, "08:00"), (PunchKind::Exit, "16:30")]),
        );
        map
    }

    #[test]
    fn one_week_row_per_distinct_week() {
        let report = generate_report(&sample_map(), &Settings::default());
        assert_eq!(report.weeks.len(), 2);
        assert_eq!(report.weeks[0].start, date::parse_date("2025-03-10").unwrap());
        assert_eq!(report.weeks[0].end, date::parse_date("2025-03-16").unwrap());
        assert_eq!(report.weeks[1].start, date::parse_date("2025-03-17").unwrap());
    }

    #[test]
    fn iso_week_numbers_on_rows() {
        let report = generate_report(&sample_map(), &Settings::default());
        assert_eq!(report.weeks[0].week_number, 11);
        assert_eq!(report.weeks[1].week_number, 12);
    }

    #[test]
    fn grand_total_matches_day_rows() {
        let report = generate_report(&sample_map(), &Settings::default());
        let day_sum: i64 = report.days.iter().map(|d| d.total_minutes).sum();
        assert_eq!(report.total_worked_minutes, day_sum);
    }

    #[test]
    fn grand_extra_accumulates_per_week() {
        let report = generate_report(&sample_map(), &Settings::default());
        let extra_sum: i64 = report.weeks.iter().map(|w| w.extra_minutes).sum();
        assert_eq!(report.total_extra_minutes, extra_sum);
    }

    #[test]
    fn week_status_follows_extra_sign() {
        let settings = Settings::default();
        let mut map = RecordMap::new();
        // exactly the weekly target: 41h across five days
        for (day, end) in [
            ("2025-03-10", "17:12"),
            ("2025-03-11", "17:12"),
            ("2025-03-12", "17:12"),
            ("2025-03-13", "17:12"),
            ("2025-03-14", "17:12"),
        ] {
            map.insert(
                day.into(),
                worked_day(&[(PunchKind::Entry, "09:00"), (PunchKind::Exit, end)]),
            );
        }
        let report = generate_report(&map, &settings);
        assert_eq!(report.weeks[0].worked_minutes, 2460);
        assert_eq!(report.weeks[0].status, WeekStatus::Complete);
    }

    #[test]
    fn day_rows_classify_and_list_times() {
        let report = generate_report(&sample_map(), &Settings::default());

        let monday = &report.days[0];
        assert_eq!(monday.class, DayClass::Normal);
        assert_eq!(monday.entries, vec!["09:00", "13:00"]);
        assert_eq!(monday.exits, vec!["12:00", "18:00"]);
        assert_eq!(monday.worked_minutes, 480);
        assert_eq!(monday.diff_minutes, 30);

        let tuesday = &report.days[1];
        assert_eq!(tuesday.class, DayClass::Vacation);
        assert_eq!(tuesday.accrued_minutes, 200);
        assert_eq!(tuesday.total_minutes, 200);
        assert_eq!(tuesday.weekday, "Tuesday");
    }

    #[test]
    fn mixed_day_classifies_combined() {
        let mut map = RecordMap::new();
        let mut rec = worked_day(&[(PunchKind::Entry, "09:00"), (PunchKind::Exit, "13:00")]);
        rec.set_special(SpecialDay::Vacation, Some(200), 450);
        map.insert("2025-03-10".into(), rec);

        let report = generate_report(&map, &Settings::default());
        assert_eq!(report.days[0].class, DayClass::WorkedVacation);
        assert_eq!(report.days[0].total_minutes, 440);
    }

    #[test]
    fn idempotent_over_same_store() {
        let map = sample_map();
        let settings = Settings::default();
        assert_eq!(generate_report(&map, &settings), generate_report(&map, &settings));
    }

    #[test]
    fn empty_store_yields_empty_report() {
        let report = generate_report(&RecordMap::new(), &Settings::default());
        assert!(report.weeks.is_empty());
        assert!(report.days.is_empty());
        assert_eq!(report.total_worked_minutes, 0);
    }
}
