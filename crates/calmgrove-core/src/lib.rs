//! # Calmgrove Core Library
//!
//! This library provides the core business logic for the Calmgrove
//! wellness app. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session Engine**: A tick-driven state machine that requires the
//!   caller to invoke `tick()` once per second of session time
//! - **Progress**: Pure derivation rules (totals, streak, forest) plus a
//!   tracker that delegates persistence to the record store
//! - **Store**: Opaque remote record store (HTTP or in-memory)
//! - **Storage**: Swappable key-value store and TOML configuration
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: Core session state machine
//! - [`ProgressTracker`]: Per-user derived statistics
//! - [`RecordStore`]: Persistence collaborator trait
//! - [`Config`]: Application configuration management

pub mod context;
pub mod error;
pub mod events;
pub mod progress;
pub mod records;
pub mod session;
pub mod storage;
pub mod store;

pub use context::{AppContext, Identity};
pub use error::{ConfigError, CoreError, PersistenceError, StorageError, ValidationError};
pub use events::Event;
pub use progress::{ProgressTracker, UserProgress};
pub use records::{CompletedSession, ForestTree, MoodCheckin, SessionRecord};
pub use session::{BreathCycle, BreathPhase, SessionEngine, SessionMode, SessionState};
pub use storage::{Config, KvStore, MemoryKv, SqliteKv};
pub use store::{HttpRecordStore, MemoryRecordStore, RecordStore};
