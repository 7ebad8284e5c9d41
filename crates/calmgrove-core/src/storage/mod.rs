mod config;
mod kv;
mod sqlite;

pub use config::Config;
pub use kv::{KvStore, MemoryKv};
pub use sqlite::SqliteKv;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/calmgrove[-dev]/` based on CALMGROVE_ENV.
///
/// Set CALMGROVE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CALMGROVE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("calmgrove-dev")
    } else {
        base_dir.join("calmgrove")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
