//! Locale files: discovery, loading, merging and rewriting.
//!
//! A locale file is a JSON object whose top-level keys are sections, each
//! section an object of translation keys. Files are rewritten in place with
//! 4-space indentation; the new content is fully serialized before the file is
//! opened for writing.

mod merge;
mod writer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

pub use merge::{MergeStats, merge_keys};
pub use writer::to_locale_string;

use super::KeyTable;

pub const LOCALE_FILE_SUFFIX: &str = ".json";

/// A parsed locale file held in memory between read and write.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    path: PathBuf,
    data: Map<String, Value>,
}

impl LocaleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;

        let data = match value {
            Value::Object(map) => map,
            _ => bail!("Root of locale file must be an object: {}", path.display()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// File name as printed in reports (`en.json`).
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }

    pub fn merge(&mut self, table: &KeyTable) -> Result<MergeStats> {
        merge_keys(&mut self.data, table)
            .with_context(|| format!("Failed to merge keys into {}", self.path.display()))
    }

    /// Overwrite the file on disk with the current document.
    pub fn save(&self) -> Result<()> {
        let content = to_locale_string(&self.data)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_locale_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .is_some_and(|name| {
                name.as_encoded_bytes()
                    .ends_with(LOCALE_FILE_SUFFIX.as_bytes())
            })
}

/// List the locale files directly inside `locales_dir`.
///
/// Subdirectories and files without the `.json` suffix are skipped. The
/// result is in directory-listing order, which is platform dependent.
pub fn scan_locale_files(locales_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let locales_dir = locales_dir.as_ref();

    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .easerc.json 'localesDir' setting.",
            locales_dir.display()
        );
    }

    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    let entries = fs::read_dir(locales_dir)
        .with_context(|| format!("Failed to read directory: {}", locales_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_locale_file(&path) {
            files.push(path);
        }
    }

    Ok(files)
}
