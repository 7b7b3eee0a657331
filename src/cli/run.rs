use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, merge::merge, probe::probe},
};

/// Dispatch to the handler of the parsed subcommand.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Probe(cmd)) => probe(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
