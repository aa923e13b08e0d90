use crate::AppContext;
use crate::cli::parser::Commands;
use crate::cli::resolve_date;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Delete a punch by id.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { id, date } = cmd {
        let d = resolve_date(date.as_ref())?;
        PunchLogic::delete(&ctx.store, d, *id)?;
        info(format!("Deleted punch {} on {}", id, d));
    }
    Ok(())
}
