use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::report::generate_report;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Export the full historical report as CSV.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Report { file, force } = cmd {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let map = ctx.store.load_map()?;
        if map.is_empty() {
            return Err(AppError::EmptyReport);
        }

        let report = generate_report(&map, &ctx.settings);
        export::write_report(path, &report, &ctx.settings, date::today())?;

        success(format!("CSV report written to {}", path.display()));
    }
    Ok(())
}
