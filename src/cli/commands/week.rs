use crate::AppContext;
use crate::cli::parser::Commands;
use crate::cli::resolve_date;
use crate::core::week::compute_week_summary;
use crate::errors::AppResult;
use crate::utils::{date, formatting};
use ansi_term::Colour;

/// Weekly summary table: one row per day, totals and the signed delta
/// against the weekly target.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Week { date: date_arg } = cmd {
        let reference = resolve_date(date_arg.as_ref())?;
        let map = ctx.store.load_map()?;
        let summary = compute_week_summary(reference, &map, &ctx.settings);

        println!(
            "Week {} ({} - {})\n",
            date::week_number(summary.week_start),
            date::short_date(summary.week_start),
            date::short_date(date::week_days(summary.week_start)[6])
        );

        for day in &summary.per_day {
            let marker = if day.is_today { "*" } else { " " };
            let worked = if day.worked_minutes > 0 {
                formatting::hm(day.worked_minutes)
            } else {
                "-".to_string()
            };
            let badge = day
                .special_day
                .map(|s| format!(" [{}]", s.as_str()))
                .unwrap_or_default();

            println!(
                "{} {:<9} {}  {}{}",
                marker,
                date::weekday_short(day.date),
                date::short_date(day.date),
                worked,
                badge
            );
        }

        let extra = summary.extra_minutes;
        let colored_extra = if extra > 0 {
            Colour::Green.paint(formatting::signed_hm(extra)).to_string()
        } else if extra < 0 {
            Colour::Red.paint(formatting::signed_hm(extra)).to_string()
        } else {
            formatting::signed_hm(extra)
        };

        println!(
            "\nWorked: {} | Target: {} | Extra: {}",
            formatting::hm(summary.total_worked_minutes),
            formatting::hm(summary.weekly_target_minutes),
            colored_extra
        );
    }
    Ok(())
}
