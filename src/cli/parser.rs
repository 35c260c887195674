use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetracker
/// CLI application to time work sessions into a CSV log
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-timer time tracker: start/stop work intervals and see today, this week and last week",
    long_about = None
)]
pub struct Cli {
    /// Override the time log path (useful for tests or a second log)
    #[arg(global = true, long = "file", short = 'f')]
    pub file: Option<String>,

    /// Override the first day of the week (0=Sunday .. 6=Saturday)
    #[arg(global = true, long = "wd", allow_negative_numbers = true)]
    pub week_start_day: Option<i64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug logs on stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the timer
    Start {
        #[arg(long, value_name = "TIMESTAMP", help = "Start time (HH:MM:SS YYYY/MM/DD), default now")]
        at: Option<String>,
    },

    /// Stop the running timer and show the updated totals
    Stop {
        #[arg(long, value_name = "TIMESTAMP", help = "End time (HH:MM:SS YYYY/MM/DD), default now")]
        at: Option<String>,
    },

    /// Show the running timer, the last interval and the totals
    Status,

    /// Show worked time for today, this week and last week
    Report,

    /// Show the most recent completed interval
    Last,

    /// Correct the most recent completed interval
    Edit {
        #[arg(long, value_name = "TIMESTAMP", help = "New start (HH:MM:SS YYYY/MM/DD)")]
        start: Option<String>,

        #[arg(long, value_name = "TIMESTAMP", help = "New end (HH:MM:SS YYYY/MM/DD)")]
        end: Option<String>,
    },

    /// List recorded intervals
    List {
        #[arg(long, short = 'n', help = "Show only the last N intervals")]
        limit: Option<usize>,
    },

    /// Create a backup copy of the time log
    Backup {
        #[arg(long, short = 'o', value_name = "FILE")]
        out: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export completed intervals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'o', value_name = "FILE")]
        out: String,

        #[arg(long)]
        force: bool,
    },
}
