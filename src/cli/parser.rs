use crate::models::SpecialDay;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tictrack
#[derive(Parser)]
#[command(
    name = "tictrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: stamp entries and exits, credit vacation and holidays, track weekly targets",
    long_about = None
)]
pub struct Cli {
    /// Override the records file path (useful for tests or custom data)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the settings file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an entry punch
    In {
        /// Punch time (HH:MM); defaults to now
        #[arg(long)]
        time: Option<String>,

        /// Day of the punch (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Record an exit punch
    Out {
        /// Punch time (HH:MM); defaults to now
        #[arg(long)]
        time: Option<String>,

        /// Day of the punch (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Move an existing punch to a new time
    Edit {
        /// Punch id (shown by `today`)
        id: u32,

        /// New time (HH:MM)
        #[arg(long)]
        time: String,

        /// Day of the punch (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a punch by id
    Del {
        /// Punch id (shown by `today`)
        id: u32,

        /// Day of the punch (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Mark a day as vacation or holiday
    Special {
        #[arg(value_enum)]
        kind: SpecialDay,

        /// Credited minutes (vacation only; clamped to the daily target)
        #[arg(long)]
        minutes: Option<i64>,

        /// Day to mark (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Clear the special-day marking
    Clear {
        /// Day to clear (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show today's punches and total
    Today,

    /// Show the weekly summary table
    Week {
        /// Reference date inside the week (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Export the full CSV report
    Report {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or update target settings
    Config {
        #[arg(long = "print", help = "Print the current settings")]
        print_config: bool,

        #[arg(long, help = "Daily target hours")]
        daily_hours: Option<i64>,

        #[arg(long, help = "Daily target minutes")]
        daily_minutes: Option<i64>,

        #[arg(long, help = "Weekly target hours")]
        weekly_hours: Option<i64>,
    },
}
