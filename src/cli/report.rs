//! Report formatting and printing utilities.
//!
//! Result lines (one per URL, one per locale file) go to stdout in a fixed
//! plain format. Diagnostics, verbose detail and summaries go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, FailedFile, InitSummary, MergeSummary, MergedFile,
    ProbeSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ProbeResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_probe_result(result: &ProbeResult) {
    print_probe_result_to(result, &mut io::stdout().lock());
}

pub fn print_probe_result_to<W: Write>(result: &ProbeResult, writer: &mut W) {
    let _ = writeln!(writer, "{}", result);
}

/// Print the line for a merged locale file, plus the added keys when verbose.
pub fn print_merged_file(file: &MergedFile, dry_run: bool, verbose: bool) {
    print_merged_file_to(file, dry_run, &mut io::stdout().lock());
    if verbose {
        print_merge_details_to(file, &mut io::stderr().lock());
    }
}

pub fn print_merged_file_to<W: Write>(file: &MergedFile, dry_run: bool, writer: &mut W) {
    let verb = if dry_run { "Would update" } else { "Updated" };
    let _ = writeln!(writer, "{} {}", verb, file.file_name);
}

pub fn print_merge_details_to<W: Write>(file: &MergedFile, writer: &mut W) {
    for section in &file.stats.created_sections {
        let _ = writeln!(writer, "  {} section {}", "+".green(), section.cyan());
    }
    for key in &file.stats.added_keys {
        let _ = writeln!(writer, "  {} {}", "+".green(), key);
    }
    if file.stats.is_unchanged() {
        let _ = writeln!(writer, "  {}", "(no missing keys)".dimmed());
    }
}

pub fn print_failed_file(file: &FailedFile) {
    print_failed_file_to(file, &mut io::stderr().lock());
}

pub fn print_failed_file_to<W: Write>(file: &FailedFile, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}: {}",
        "error".bold().red(),
        file.file_name,
        file.error
    );
}

/// Print the end-of-command output.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Probe(summary) => {
            if verbose {
                print_probe_summary_to(summary, &mut io::stderr().lock());
            }
        }
        CommandSummary::Merge(summary) => {
            if verbose || !summary.failed.is_empty() {
                print_merge_summary_to(summary, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

pub fn print_probe_summary_to<W: Write>(summary: &ProbeSummary, writer: &mut W) {
    let total = summary.reachable_count + summary.failed_count;
    if summary.failed_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} of {} URL(s) reachable", summary.reachable_count, total).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} of {} URL(s) failed", summary.failed_count, total).red()
        );
    }
}

pub fn print_merge_summary_to<W: Write>(summary: &MergeSummary, writer: &mut W) {
    let verb = if summary.is_dry_run {
        "Would add"
    } else {
        "Added"
    };
    let files = summary.merged.len();
    let _ = writeln!(
        writer,
        "{} {} {} key(s) across {} locale {}",
        SUCCESS_MARK.green(),
        verb.green().bold(),
        summary.added_key_count(),
        files,
        if files == 1 { "file" } else { "files" }
    );
    if !summary.failed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} locale file(s) could not be merged",
            FAILURE_MARK.red(),
            summary.failed.len()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    }
}
