//! rPaysheet library root.
//! Exposes the rate calculator, the CLI parser, the high-level run()
//! function and the supporting modules.

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
use config::Config;
use crate::core::calculator::MonthOrder;
use errors::{AppError, AppResult};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub use crate::core::calculator::{compute_entry_value, group_by_month, month_total};

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "RPAYSHEET_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Types { .. } => cli::commands::types::handle(&cli.command, cfg),
        Commands::Rate { .. } => cli::commands::rate::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Expense { action } => cli::commands::expense::handle(action, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Install the stderr tracing subscriber. `RPAYSHEET_LOG` wins over
/// `--verbose`; without either only warnings are shown.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 3️⃣ command line overrides
    apply_overrides(&cli, &mut cfg)?;
    tracing::debug!(config = %config_path.display(), snapshot = %cfg.snapshot, "configuration resolved");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}

fn apply_overrides(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Some(custom) = &cli.snapshot {
        cfg.snapshot = custom.clone();
    }

    if let Some(order) = &cli.order {
        cfg.month_order = MonthOrder::from_code(order)
            .ok_or_else(|| AppError::Config(format!("invalid month order '{order}'")))?;
    }

    Ok(())
}
