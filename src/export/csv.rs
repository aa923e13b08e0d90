//! CSV rendering of the report: a week-summary section, a grand-total row
//! and a daily detail section, separated by blank lines. Prefixed with a
//! UTF-8 BOM so spreadsheet applications pick the encoding up.

use crate::config::Settings;
use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, formatting};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render one section of rows; the csv crate handles quoting/escaping.
fn section(rows: &[Vec<String>]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

fn owned(row: &[&str]) -> Vec<String> {
    row.iter().map(|s| s.to_string()).collect()
}

pub fn render_report(
    report: &Report,
    settings: &Settings,
    generated_on: NaiveDate,
) -> AppResult<String> {
    let header = section(&[
        owned(&["WORKED HOURS REPORT - tictrack"]),
        owned(&["Generated on", &date::short_date(generated_on)]),
        owned(&[
            "Daily target",
            &formatting::hm(settings.daily_target_minutes()),
        ]),
        owned(&["Weekly target", &format!("{}h", settings.weekly_hours)]),
    ])?;

    let mut week_rows = vec![owned(&[
        "Week", "Start", "End", "Worked", "Target", "Extra", "Status",
    ])];
    for week in &report.weeks {
        week_rows.push(vec![
            format!("Week {}", week.week_number),
            date::short_date(week.start),
            date::short_date(week.end),
            formatting::hm(week.worked_minutes),
            format!("{}h", settings.weekly_hours),
            formatting::signed_hm(week.extra_minutes),
            week.status.as_str().to_string(),
        ]);
    }
    week_rows.push(vec![
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        formatting::hm(report.total_worked_minutes),
        String::new(),
        formatting::signed_hm(report.total_extra_minutes),
        String::new(),
    ]);
    let weeks = section(&week_rows)?;

    let mut day_rows = vec![owned(&[
        "Date", "Weekday", "Type", "Entries", "Exits", "Worked", "Accrued", "Total", "Target",
        "Difference",
    ])];
    for day in &report.days {
        let entries = if day.entries.is_empty() {
            "-".to_string()
        } else {
            day.entries.join(" / ")
        };
        let exits = if day.exits.is_empty() {
            "-".to_string()
        } else {
            day.exits.join(" / ")
        };

        day_rows.push(vec![
            date::short_date(day.date),
            day.weekday.to_string(),
            day.class.as_str().to_string(),
            entries,
            exits,
            formatting::hm(day.worked_minutes),
            formatting::hm(day.accrued_minutes),
            formatting::hm(day.total_minutes),
            formatting::hm(day.target_minutes),
            formatting::signed_hm(day.diff_minutes),
        ]);
    }
    let days = section(&day_rows)?;

    Ok(format!(
        "\u{FEFF}{header}\nWEEKLY SUMMARY\n{weeks}\nDAILY DETAIL\n{days}"
    ))
}

pub fn write_report(
    path: &Path,
    report: &Report,
    settings: &Settings,
    generated_on: NaiveDate,
) -> AppResult<()> {
    let content = render_report(report, settings, generated_on)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::generate_report;
    use crate::models::{DayRecord, PunchKind, SpecialDay};
    use crate::store::RecordMap;
    use crate::utils::time::parse_time;

    fn sample() -> (RecordMap, Settings) {
        let mut map = RecordMap::new();
        let mut mon = DayRecord::default();
        mon.add_punch(PunchKind::Entry, parse_time("09:00").unwrap());
        mon.add_punch(PunchKind::Exit, parse_time("17:30").unwrap());
        map.insert("2025-03-10".into(), mon);

        let mut tue = DayRecord::default();
        tue.set_special(SpecialDay::Holiday, None, 450);
        map.insert("2025-03-11".into(), tue);

        (map, Settings::default())
    }

    fn d(s: &str) -> NaiveDate {
        date::parse_date(s).unwrap()
    }

    #[test]
    fn renders_all_sections() {
        let (map, settings) = sample();
        let report = generate_report(&map, &settings);
        let csv = render_report(&report, &settings, d("2025-03-20")).unwrap();

        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("WEEKLY SUMMARY"));
        assert!(csv.contains("DAILY DETAIL"));
        assert!(csv.contains("Week 11,10/03/2025,16/03/2025"));
        assert!(csv.contains("10/03/2025,Monday,Normal,09:00,17:30"));
        assert!(csv.contains("11/03/2025,Tuesday,Holiday,-,-"));
        assert!(csv.contains("Generated on,20/03/2025"));
    }

    #[test]
    fn header_targets_use_padded_minutes() {
        let (map, _) = sample();
        let settings = Settings {
            daily_hours: 8,
            daily_minutes: 0,
            weekly_hours: 40,
        };
        let report = generate_report(&map, &settings);
        let csv = render_report(&report, &settings, d("2025-03-20")).unwrap();
        assert!(csv.contains("Daily target,8h 00min"));
    }

    #[test]
    fn byte_identical_for_same_input() {
        let (map, settings) = sample();
        let report = generate_report(&map, &settings);
        let a = render_report(&report, &settings, d("2025-03-20")).unwrap();
        let b = render_report(&report, &settings, d("2025-03-20")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deficit_week_renders_signed_extra() {
        let (map, settings) = sample();
        let report = generate_report(&map, &settings);
        // 510 + 450 worked against a 2460 target
        let csv = render_report(&report, &settings, d("2025-03-20")).unwrap();
        assert!(csv.contains("-25h 00min,deficit"));
    }
}
