use crate::AppContext;
use crate::core::accounting;
use crate::errors::AppResult;
use crate::store;
use crate::utils::{date, formatting};

/// Show today's sorted punches, special-day state and total.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let today = date::today();
    let key = date::date_key(today);

    let map = ctx.store.load_map()?;
    let record = store::day_or_default(&map, &key);

    println!("=== {} ({}) ===", key, date::weekday_name(today));

    if record.is_empty() {
        println!("No punches today");
        return Ok(());
    }

    for punch in record.sorted_punches() {
        println!(
            "{:>3}: {:<5} {}",
            punch.id,
            punch.kind.as_str(),
            punch.time_str()
        );
    }

    if let Some(kind) = record.special_day {
        let credited = accounting::special_accrual(&record, &ctx.settings);
        println!("{}: {} credited", kind.as_str(), formatting::hm(credited));
    }

    let total = accounting::compute_day_total(&record, &ctx.settings);
    println!(
        "Total: {} (target {})",
        formatting::hm(total),
        formatting::hm(ctx.settings.daily_target_minutes())
    );
    Ok(())
}
