use std::time::Duration;

use anyhow::{Context, Result};

use super::super::{args::ProbeCommand, report};
use super::helper::{finish, load_workspace_config};
use super::{CommandResult, CommandSummary, ProbeSummary};
use crate::core::Prober;

pub fn probe(cmd: ProbeCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let loaded = load_workspace_config(verbose)?;

    let urls = if cmd.urls.is_empty() {
        loaded.config.probe_urls.clone()
    } else {
        cmd.urls
    };
    let timeout = cmd
        .timeout
        .map(Duration::from_secs)
        .or_else(|| loaded.config.probe_timeout());

    if verbose {
        match timeout {
            Some(t) => eprintln!("Probing {} URL(s), timeout {}s", urls.len(), t.as_secs()),
            None => eprintln!("Probing {} URL(s), no timeout", urls.len()),
        }
    }

    let summary = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?
        .block_on(async {
            let prober = Prober::new(timeout)?;
            let mut summary = ProbeSummary::default();
            for url in &urls {
                let result = prober.probe(url).await;
                if result.outcome.is_failed() {
                    summary.failed_count += 1;
                } else {
                    summary.reachable_count += 1;
                }
                report::print_probe_result(&result);
            }
            Ok::<_, anyhow::Error>(summary)
        })?;

    let error_count = summary.failed_count;
    Ok(finish(
        CommandSummary::Probe(summary),
        error_count,
        cmd.strict,
    ))
}
