use crate::AppContext;
use crate::cli::parser::Commands;
use crate::cli::resolve_date;
use crate::core::special::SpecialLogic;
use crate::errors::AppResult;
use crate::models::SpecialDay;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting;

/// Mark a day as vacation/holiday, or clear the marking.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Special {
            kind,
            minutes,
            date,
        } => {
            let d = resolve_date(date.as_ref())?;

            if minutes.is_some() && *kind == SpecialDay::Holiday {
                warning("--minutes is ignored for holidays (full daily target credited)");
            }

            let record = SpecialLogic::set(&ctx.store, d, *kind, *minutes, &ctx.settings)?;
            let credited = record
                .vacation_minutes
                .unwrap_or_else(|| ctx.settings.daily_target_minutes());

            success(format!(
                "{} marked as {} ({} credited)",
                d,
                kind.as_str(),
                formatting::hm(credited)
            ));
        }
        Commands::Clear { date } => {
            let d = resolve_date(date.as_ref())?;
            SpecialLogic::clear(&ctx.store, d)?;
            info(format!("Cleared special-day marking on {}", d));
        }
        _ => {}
    }
    Ok(())
}
