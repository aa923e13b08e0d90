use crate::AppContext;
use crate::cli::parser::Commands;
use crate::cli::{resolve_date, resolve_time};
use crate::core::accounting;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::models::PunchKind;
use crate::ui::messages::success;
use crate::utils::{formatting, time};

/// Record an entry or exit punch.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let (kind, time_arg, date_arg) = match cmd {
        Commands::In { time, date } => (PunchKind::Entry, time, date),
        Commands::Out { time, date } => (PunchKind::Exit, time, date),
        _ => return Ok(()),
    };

    let d = resolve_date(date_arg.as_ref())?;
    let t = resolve_time(time_arg.as_ref())?;

    let record = PunchLogic::record(&ctx.store, d, kind, t)?;
    let total = accounting::compute_day_total(&record, &ctx.settings);

    success(format!(
        "Recorded {} at {} on {} (day total: {})",
        kind.as_str(),
        time::format_time(t),
        d,
        formatting::hm(total)
    ));
    Ok(())
}
