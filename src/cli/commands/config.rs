use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            info("Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if (*check || *do_migrate || *edit_config) && !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `rpaysheet init`)",
                path.display()
            )));
        }

        if *check {
            let missing = migrate::missing_fields(path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        if *do_migrate {
            let added = migrate::migrate(path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            let used = open_in_editor(path, editor.as_deref())?;
            success(format!("Configuration file edited with '{used}'."));
        }
    }

    Ok(())
}

/// Editors to try, most specific first: `--editor`, `$EDITOR`, `$VISUAL`,
/// then the platform default. Duplicates are dropped.
fn editor_candidates(explicit: Option<&str>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let mut out: Vec<String> = Vec::new();
    let env_editors = ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok());

    for name in explicit
        .map(str::to_string)
        .into_iter()
        .chain(env_editors)
        .chain(std::iter::once(platform.to_string()))
    {
        let name = name.trim().to_string();
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Run the first editor that exits successfully; returns its name.
fn open_in_editor(path: &Path, explicit: Option<&str>) -> AppResult<String> {
    let candidates = editor_candidates(explicit);

    for editor in &candidates {
        match Command::new(editor).arg(path).status() {
            Ok(status) if status.success() => return Ok(editor.clone()),
            outcome => {
                debug!(editor = %editor, ?outcome, "editor failed");
                warning(format!("Editor '{editor}' not available, trying the next one"));
            }
        }
    }

    Err(AppError::Config(format!(
        "could not open {} with any of: {}",
        path.display(),
        candidates.join(", ")
    )))
}
