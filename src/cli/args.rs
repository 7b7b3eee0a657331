//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `probe`: HEAD-request asset URLs and print status, type and size
//! - `merge`: Add missing translation keys to every locale file
//! - `init`: Initialize easectl configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Probe(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ProbeCommand {
    /// URLs to probe (overrides config file)
    pub urls: Vec<String>,

    /// Per-request timeout in seconds (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Exit with status 1 if any URL could not be reached
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Locales directory path (overrides config file)
    #[arg(long, env = "EASE_LOCALES_DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Compute changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Report a broken locale file and continue with the rest
    #[arg(long)]
    pub keep_going: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that asset URLs are reachable (HEAD request per URL)
    Probe(ProbeCommand),
    /// Add missing translation keys to every JSON locale file
    Merge(MergeCommand),
    /// Initialize a new .easerc.json configuration file
    Init,
}
