use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::KeyTable;

pub const CONFIG_FILE_NAME: &str = ".easerc.json";

pub const DEFAULT_PROBE_URLS: &[&str] = &[
    "http://localhost:5175/background_day.png",
    "http://localhost:5175/background_night.png",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_probe_urls")]
    pub probe_urls: Vec<String>,
    /// Per-request timeout for the prober. No timeout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_timeout_secs: Option<u64>,
    #[serde(default)]
    pub new_keys: KeyTable,
}

fn default_locales_dir() -> String {
    "./client/src/locales".to_string()
}

fn default_probe_urls() -> Vec<String> {
    DEFAULT_PROBE_URLS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            probe_urls: default_probe_urls(),
            probe_timeout_secs: None,
            new_keys: KeyTable::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The shape of `newKeys` is already checked while deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.locales_dir.trim().is_empty() {
            bail!("'localesDir' must not be empty");
        }

        if self.probe_timeout_secs == Some(0) {
            bail!("'probeTimeoutSecs' must be greater than 0");
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(Duration::from_secs)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Resolve a path from the config relative to the directory holding the
    /// config file. Absolute paths and default configs are left as they are.
    pub fn resolve(&self, value: &str) -> PathBuf {
        let value = Path::new(value);
        match self.path.as_deref().and_then(Path::parent) {
            Some(base) if value.is_relative() => base.join(value),
            _ => value.to_path_buf(),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
