use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Show or update the target settings.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        daily_hours,
        daily_minutes,
        weekly_hours,
    } = cmd
    {
        let mut settings = ctx.settings.clone();
        let mut changed = false;

        if let Some(h) = daily_hours {
            settings.daily_hours = (*h).max(0);
            changed = true;
        }
        if let Some(m) = daily_minutes {
            settings.daily_minutes = (*m).max(0);
            changed = true;
        }
        if let Some(h) = weekly_hours {
            settings.weekly_hours = (*h).max(0);
            changed = true;
        }

        if changed {
            settings.save_to(&ctx.settings_path)?;
            success(format!("Settings saved to {}", ctx.settings_path.display()));
        }

        if *print_config || !changed {
            println!(
                "daily_target:  {}h {:02}min\nweekly_target: {}h",
                settings.daily_hours, settings.daily_minutes, settings.weekly_hours
            );
        }
    }
    Ok(())
}
