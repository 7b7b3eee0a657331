use std::env;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::config::{ConfigLoadResult, load_config};

/// Load the config governing the current working directory.
pub fn load_workspace_config(verbose: bool) -> Result<ConfigLoadResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    if verbose {
        match &loaded.path {
            Some(path) => eprintln!("Using config {}", path.display()),
            None => eprintln!("No config file found, using defaults"),
        }
    }

    Ok(loaded)
}

pub fn finish(summary: CommandSummary, error_count: usize, exit_on_errors: bool) -> CommandResult {
    CommandResult {
        summary,
        error_count,
        exit_on_errors,
    }
}
