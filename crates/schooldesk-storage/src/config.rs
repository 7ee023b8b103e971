//! schooldesk configuration and storage factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use schooldesk_core::notice::Notice;
use schooldesk_core::seed::seed_notices;
use schooldesk_core::store::PRACTICE_TESTS_KEY;

use crate::file::FileStore;

/// Top-level schooldesk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchooldeskConfig {
    /// Directory holding the file-backed key-value store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage key for the practice-test collection.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Time limit in minutes for generated tests when none is given.
    #[serde(default = "default_time_limit")]
    pub default_time_limit: u32,
    /// JSON file of notices to use instead of the built-in seed notices.
    #[serde(default)]
    pub notices_file: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./schooldesk-data")
}
fn default_storage_key() -> String {
    PRACTICE_TESTS_KEY.to_string()
}
fn default_time_limit() -> u32 {
    30
}

impl Default for SchooldeskConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            default_time_limit: default_time_limit(),
            notices_file: None,
        }
    }
}

impl SchooldeskConfig {
    /// File store rooted at `data_dir`.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }

    /// Notices from `notices_file`, or the seed notices when unset.
    pub fn load_notices(&self) -> Result<Vec<Notice>> {
        match &self.notices_file {
            Some(path) => load_notices_file(path),
            None => Ok(seed_notices()),
        }
    }
}

/// Load a JSON array of notices.
pub fn load_notices_file(path: &Path) -> Result<Vec<Notice>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read notices file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse notices file: {}", path.display()))
}

/// Substitute `${NAME}` references with the value of the environment
/// variable `NAME` (empty when unset). Substituted text is not rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find("${") {
        let Some(len) = rest[open + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let name = &rest[open + 2..open + 2 + len];
        out.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[open + 2 + len + 1..];
    }
    out.push_str(rest);
    out
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Without a path the search order is `schooldesk.toml` in the current
/// directory, then `~/.config/schooldesk/config.toml`. `SCHOOLDESK_DATA_DIR`
/// overrides `data_dir` either way.
pub fn load_config_from(path: Option<&Path>) -> Result<SchooldeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("schooldesk.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SchooldeskConfig::default(),
    };

    if let Ok(dir) = std::env::var("SCHOOLDESK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.notices_file = config.notices_file.as_deref().map(resolve_path);

    anyhow::ensure!(
        !config.storage_key.trim().is_empty(),
        "storage_key must not be empty"
    );

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<SchooldeskConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("schooldesk"))
}
