//! tictrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Settings;
use errors::AppResult;
use std::path::PathBuf;
use store::RecordStore;

/// Resolved environment for one invocation: where records and settings live,
/// and the settings value itself (loaded once, passed explicitly everywhere).
pub struct AppContext {
    pub store: RecordStore,
    pub settings: Settings,
    pub settings_path: PathBuf,
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::In { .. } | Commands::Out { .. } => cli::commands::punch::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::Special { .. } | Commands::Clear { .. } => {
            cli::commands::special::handle(&cli.command, ctx)
        }
        Commands::Today => cli::commands::today::handle(ctx),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, ctx),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let settings_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Settings::settings_file);
    let settings = Settings::load_from(&settings_path);

    let records_path = cli
        .data
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Settings::records_file);

    let ctx = AppContext {
        store: RecordStore::new(records_path),
        settings,
        settings_path,
    };

    dispatch(&cli, &ctx)
}
