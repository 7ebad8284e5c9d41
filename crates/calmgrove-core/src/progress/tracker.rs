//! Side-effecting entry points over the derivation rules.
//!
//! One entry point per event: a completed session, a mood check-in.
//! Persistence is delegated to the [`RecordStore`] collaborator;
//! failures are logged and never surfaced as hard errors -- the flow
//! degrades to "state not saved".

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use super::aggregate::{recompute, UserProgress};
use crate::context::Identity;
use crate::error::ValidationError;
use crate::records::{validate_rating, CompletedSession, ForestTree, MoodCheckin, SessionRecord};
use crate::store::{RecordStore, DEFAULT_CHECKIN_LIMIT};

/// Tracks a single user's derived progress against the record store.
pub struct ProgressTracker {
    identity: Identity,
    store: Arc<dyn RecordStore>,
    progress: UserProgress,
}

impl ProgressTracker {
    pub fn new(identity: Identity, store: Arc<dyn RecordStore>) -> Self {
        Self {
            identity,
            store,
            progress: UserProgress::default(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The current progress snapshot. Call [`refresh`](Self::refresh)
    /// first to pick up records written by other devices.
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Reload all record sets and recompute the snapshot. For guests
    /// this is a no-op: their progress lives only in memory. If any
    /// list fails, the previous (stale) snapshot is kept.
    pub async fn refresh(&mut self) -> &UserProgress {
        if let Identity::User(user_id) = self.identity.clone() {
            let listed = tokio::try_join!(
                self.store.list_sessions(&user_id),
                self.store.list_trees(&user_id),
                self.store.list_mood_checkins(&user_id, DEFAULT_CHECKIN_LIMIT),
            );
            match listed {
                Ok((sessions, trees, checkins)) => {
                    self.progress = recompute(&sessions, &trees, &checkins);
                }
                Err(err) => warn!(%err, "failed to reload records; keeping stale progress"),
            }
        }
        &self.progress
    }

    /// Record a completed session.
    ///
    /// Guests get an optimistic in-memory increment and no store calls.
    /// Persisted identities get one appended `SessionRecord`, one
    /// derived `ForestTree`, then a full recompute from the reloaded
    /// record set. Append failures are logged, not retried; the
    /// recompute then simply reads whatever the store holds.
    pub async fn record_session(&mut self, completed: CompletedSession) -> SessionRecord {
        let record = SessionRecord {
            id: Uuid::new_v4(),
            user_id: self.identity.record_owner().to_string(),
            duration_secs: completed.duration_secs,
            mode: completed.mode,
            started_at: completed.started_at,
            mood_before: completed.mood_before,
            mood_after: completed.mood_after,
        };

        if self.identity.is_guest() {
            self.progress.total_meditations += 1;
            self.progress.total_minutes += record.duration_minutes();
            return record;
        }

        if let Err(err) = self.store.append_session(&record).await {
            warn!(%err, "failed to persist session record");
        }
        let tree = ForestTree::from_session(&record);
        if let Err(err) = self.store.append_tree(&tree).await {
            warn!(%err, "failed to persist forest tree");
        }
        self.refresh().await;
        record
    }

    /// Record a daily mood check-in. No-op for guests. The rating is
    /// validated synchronously before any side effect.
    pub async fn record_mood_checkin(
        &mut self,
        rating: u8,
        journal_text: Option<String>,
    ) -> Result<Option<MoodCheckin>, ValidationError> {
        validate_rating(rating)?;
        if self.identity.is_guest() {
            return Ok(None);
        }

        let checkin = MoodCheckin {
            id: Uuid::new_v4(),
            user_id: self.identity.record_owner().to_string(),
            date: Utc::now().date_naive(),
            rating,
            journal_text,
        };
        if let Err(err) = self.store.append_mood_checkin(&checkin).await {
            warn!(%err, "failed to persist mood check-in");
        }
        self.refresh().await;
        Ok(Some(checkin))
    }
}
