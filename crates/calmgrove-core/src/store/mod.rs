//! Remote record store abstraction.
//!
//! The progress tracker persists sessions, trees, and mood check-ins
//! through this trait. The transport is opaque to the rest of the core:
//! an HTTP implementation talks to the remote API, an in-memory one
//! backs tests and offline use.

mod http;
mod memory;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::records::{ForestTree, MoodCheckin, SessionRecord};

/// Default number of mood check-ins fetched for a progress snapshot.
pub const DEFAULT_CHECKIN_LIMIT: usize = 30;

/// Asynchronous append/list API over the user's records.
///
/// Lists are returned date-descending. Callers do not retry failures;
/// every error is a [`PersistenceError`] to be logged and tolerated.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append_session(
        &self,
        record: &SessionRecord,
    ) -> Result<SessionRecord, PersistenceError>;

    async fn append_tree(&self, record: &ForestTree) -> Result<ForestTree, PersistenceError>;

    async fn append_mood_checkin(
        &self,
        record: &MoodCheckin,
    ) -> Result<MoodCheckin, PersistenceError>;

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionRecord>, PersistenceError>;

    async fn list_trees(&self, user_id: &str) -> Result<Vec<ForestTree>, PersistenceError>;

    async fn list_mood_checkins(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MoodCheckin>, PersistenceError>;
}
