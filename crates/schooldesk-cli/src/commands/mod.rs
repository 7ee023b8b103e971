//! Subcommand implementations.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use schooldesk_core::TestStore;
use schooldesk_storage::{load_config_from, FileStore, SchooldeskConfig};

pub mod categories;
pub mod generate;
pub mod init;
pub mod notices;
pub mod progress;
pub mod subjects;
pub mod validate;

/// Load the config and open the practice-test store it points at.
fn open_store(config_path: Option<&Path>) -> Result<(SchooldeskConfig, TestStore<FileStore>)> {
    let config = load_config_from(config_path)?;
    let store = TestStore::load_with_key(config.file_store(), config.storage_key.clone())
        .with_context(|| {
            format!(
                "failed to load practice tests from {}",
                config.data_dir.display()
            )
        })?;
    Ok((config, store))
}

/// Output format shared by the listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format: {other}"),
        }
    }
}
