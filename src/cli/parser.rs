use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// Personal punch clock with SQLite storage
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal punch clock: punch work, breaks and client visits, check the daily summary and the calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (config file neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Record a punch now
    Punch {
        /// work-start, work-end, break-start, break-end, client-start, client-end
        kind: String,
    },

    /// Show the clock, the current status and the punches available now
    Status,

    /// Show today's summary and punches
    Today {
        #[arg(long = "watch", help = "Refresh the summary every second")]
        watch: bool,

        #[arg(
            long = "ticks",
            requires = "watch",
            help = "Stop watching after this many refreshes"
        )]
        ticks: Option<u64>,
    },

    /// Show the yearly calendar of punched days
    Calendar {
        #[arg(long, short, help = "Year to show (default: current year)")]
        year: Option<i32>,
    },

    /// List the punches of one day (YYYY-MM-DD)
    Day { date: String },

    /// Submit a time-off, vacation or adjustment request
    ///
    /// The request is validated and printed. It is not kept after the
    /// command ends.
    Request {
        #[arg(long = "kind", help = "time-off, vacation or adjustment")]
        kind: String,

        #[arg(
            long = "start",
            help = "Date (YYYY-MM-DD); adjustments also accept 'YYYY-MM-DD HH:MM'"
        )]
        start: String,

        #[arg(long = "end", help = "Last day of a vacation (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "reason", help = "Reason or justification")]
        reason: String,
    },

    /// Show or change the color theme (dark, light, toggle)
    Theme { mode: Option<String> },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
