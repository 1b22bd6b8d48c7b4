use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPaysheet
#[derive(Parser, Debug)]
#[command(
    name = "rpaysheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: group entries by month and compute pay totals from configurable rates",
    long_about = None
)]
pub struct Cli {
    /// Override snapshot path (JSON or YAML file with work types, rates and entries)
    #[arg(global = true, long = "snapshot", value_name = "FILE")]
    pub snapshot: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Month order: descending, ascending or first-seen (overrides the configuration)
    #[arg(global = true, long = "order", value_name = "ORDER")]
    pub order: Option<String>,

    /// Enable debug logging on stderr (same as RPAYSHEET_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the configuration file and an empty snapshot
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// List work types with their configured rates, or add a work type
    Types {
        #[arg(long = "add", value_name = "ID", requires_all = ["name", "rate_type"], help = "Id of the work type to add")]
        add: Option<String>,

        #[arg(long = "name", help = "Display name (\"Other\" enables per-entry custom rates)")]
        name: Option<String>,

        #[arg(long = "rate-type", value_name = "TYPE", help = "fixed or hourly")]
        rate_type: Option<String>,
    },

    /// Set or clear the rate of a work type
    Rate {
        /// Work type id
        work_type: String,

        #[arg(long = "hourly", help = "Hourly rate")]
        hourly: Option<f64>,

        #[arg(long = "fixed", help = "Fixed rate per job")]
        fixed: Option<f64>,

        #[arg(long = "clear", help = "Remove the rate policy for this work type")]
        clear: bool,
    },

    /// Add an entry
    Add {
        /// Date of the work (YYYY-MM-DD)
        date: String,

        /// Work type id
        work_type: String,

        /// Hours (hourly work types) or number of jobs (fixed work types)
        hours: f64,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "rate", help = "Custom rate (only for the \"Other\" work type)")]
        rate: Option<f64>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "work-type", help = "New work type id")]
        work_type: Option<String>,

        #[arg(long = "hours", help = "New hours / number of jobs")]
        hours: Option<f64>,

        #[arg(long = "in", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "clear-times", help = "Remove start and end time")]
        clear_times: bool,

        #[arg(long = "rate", help = "New custom rate (only for the \"Other\" work type)")]
        rate: Option<f64>,

        #[arg(long = "clear-rate", help = "Remove the custom rate")]
        clear_rate: bool,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List priced entries grouped by month
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        ///
        /// Special value:
        /// - all                   → every entry (default)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        #[arg(long = "work-type", help = "Only entries of this work type id")]
        work_type: Option<String>,
    },

    /// Show one total per month
    Summary {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Record, list or delete expenses (subtracted from salary in `stats`)
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Show salary, expenses and net amount per month
    Stats {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Export priced entries or month totals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'm', help = "Export month totals instead of entries")]
        months: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpenseAction {
    /// Record an expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Amount spent
        amount: f64,

        #[arg(long = "desc", default_value = "", help = "Short description")]
        description: String,
    },

    /// List expenses
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete an expense by id
    Del {
        /// Expense id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
