//! Core jobs, independent of the command-line layer.
//!
//! - `key_table`: the configured section → key → default value table
//! - `locale`: locale file discovery, merging and rewriting
//! - `probe`: HEAD-request availability checks

pub mod key_table;
pub mod locale;
pub mod probe;

pub use key_table::{KeySection, KeyTable, KeyTableError};
pub use locale::{LocaleFile, MergeStats, merge_keys, scan_locale_files};
pub use probe::{ProbeOutcome, ProbeResult, Prober};
