use std::path::Path;

use anyhow::Result;

use super::super::{args::MergeCommand, report};
use super::helper::{finish, load_workspace_config};
use super::{CommandResult, CommandSummary, FailedFile, MergeSummary, MergedFile};
use crate::core::{KeyTable, LocaleFile, MergeStats, locale::file_name, scan_locale_files};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let loaded = load_workspace_config(verbose)?;

    let locales_dir = match cmd.locales_dir {
        Some(dir) => dir,
        None => loaded.resolve(&loaded.config.locales_dir),
    };
    let table = &loaded.config.new_keys;

    if verbose {
        eprintln!(
            "Merging {} key(s) from {} section(s) into {}",
            table.key_count(),
            table.sections().len(),
            locales_dir.display()
        );
    }

    let mut summary = MergeSummary {
        is_dry_run: cmd.dry_run,
        ..Default::default()
    };

    for path in scan_locale_files(&locales_dir)? {
        match merge_file(&path, table, cmd.dry_run) {
            Ok(stats) => {
                let merged = MergedFile {
                    file_name: file_name(&path),
                    stats,
                };
                report::print_merged_file(&merged, cmd.dry_run, verbose);
                summary.merged.push(merged);
            }
            Err(err) if cmd.keep_going => {
                let failed = FailedFile {
                    file_name: file_name(&path),
                    error: format!("{:#}", err),
                };
                report::print_failed_file(&failed);
                summary.failed.push(failed);
            }
            Err(err) => return Err(err),
        }
    }

    let error_count = summary.failed.len();
    Ok(finish(CommandSummary::Merge(summary), error_count, true))
}

/// Read, merge and (unless `dry_run`) rewrite one locale file.
fn merge_file(path: &Path, table: &KeyTable, dry_run: bool) -> Result<MergeStats> {
    let mut file = LocaleFile::load(path)?;
    let stats = file.merge(table)?;
    if !dry_run {
        file.save()?;
    }
    Ok(stats)
}
