//! schooldesk-storage: key-value storage backends and configuration.
//!
//! Implements the `KeyValueStore` trait for a directory of JSON files and
//! for an in-memory map, and loads the `schooldesk.toml` configuration that
//! decides where practice tests are kept.

pub mod config;
pub mod file;
pub mod memory;

pub use config::{load_config_from, SchooldeskConfig};
pub use file::FileStore;
pub use memory::MemoryStore;
