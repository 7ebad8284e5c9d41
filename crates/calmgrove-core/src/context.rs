//! Explicit application state, dependency-injected rather than ambient.
//!
//! Created once at app start and passed down; torn down at exit. No
//! process-wide singletons.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::progress::ProgressTracker;
use crate::storage::{Config, KvStore};
use crate::store::RecordStore;

/// Who owns the records produced in this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum Identity {
    /// Ephemeral identity: progress is memory-only and lost on exit.
    Guest,
    /// Persisted identity: records are written to the record store.
    User(String),
}

impl Identity {
    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest)
    }

    /// Owner string stamped onto records.
    pub fn record_owner(&self) -> &str {
        match self {
            Identity::Guest => "guest",
            Identity::User(id) => id,
        }
    }
}

/// Dependency-injected application state.
pub struct AppContext {
    pub config: Config,
    pub identity: Identity,
    pub kv: Box<dyn KvStore>,
    pub tracker: ProgressTracker,
}

impl AppContext {
    /// Assemble a context from its parts. The tracker shares the given
    /// record store and identity.
    pub fn new(
        config: Config,
        identity: Identity,
        kv: Box<dyn KvStore>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        let tracker = ProgressTracker::new(identity.clone(), store);
        Self {
            config,
            identity,
            kv,
            tracker,
        }
    }
}
