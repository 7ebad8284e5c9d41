//! Core error types for calmgrove-core.
//!
//! This module defines the error hierarchy using thiserror. Local
//! validation failures are synchronous and never reach the network;
//! persistence failures are logged by callers and never fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for calmgrove-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Remote record store errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Local key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the remote record store.
///
/// All variants are treated identically by callers: logged, not retried,
/// not surfaced as a hard failure.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Record store returned HTTP {status} for {operation}")]
    Http { operation: String, status: u16 },

    /// Response body could not be decoded
    #[error("Failed to decode record store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Local key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open storage at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Storage query failed: {0}")]
    QueryFailed(String),

    /// Storage directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown or malformed configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors. Rejected synchronously, before any side effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Target duration must be positive
    #[error("Invalid session duration: {seconds} seconds (must be greater than zero)")]
    InvalidDuration { seconds: i64 },

    /// Mood ratings are on a 1-5 scale
    #[error("Invalid mood rating: {value} (must be between 1 and 5)")]
    InvalidRating { value: u8 },

    /// Operation not valid in the current engine state
    #[error("Operation '{operation}' not valid in state '{state}'")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
