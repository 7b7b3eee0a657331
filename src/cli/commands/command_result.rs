use crate::core::MergeStats;

#[derive(Debug)]
pub enum CommandSummary {
    Probe(ProbeSummary),
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct ProbeSummary {
    pub reachable_count: usize,
    pub failed_count: usize,
}

/// One locale file the merge went through.
#[derive(Debug)]
pub struct MergedFile {
    pub file_name: String,
    pub stats: MergeStats,
}

/// A locale file skipped by `--keep-going`.
#[derive(Debug)]
pub struct FailedFile {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct MergeSummary {
    pub merged: Vec<MergedFile>,
    pub failed: Vec<FailedFile>,
    pub is_dry_run: bool,
}

impl MergeSummary {
    pub fn added_key_count(&self) -> usize {
        self.merged.iter().map(|f| f.stats.added_keys.len()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running easectl commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (the prober's default: per-URL failures are
    /// reported, not signalled).
    pub exit_on_errors: bool,
}
