use crate::AppContext;
use crate::cli::parser::Commands;
use crate::cli::resolve_date;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_time;

/// Move an existing punch to a new time.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Edit { id, time, date } = cmd {
        let d = resolve_date(date.as_ref())?;
        let t = parse_time(time)?;

        PunchLogic::edit(&ctx.store, d, *id, t)?;
        success(format!("Punch {} on {} moved to {}", id, d, time));
    }
    Ok(())
}
