//! In-memory record store for tests and offline use.

use std::sync::Mutex;

use async_trait::async_trait;

use super::RecordStore;
use crate::error::PersistenceError;
use crate::records::{ForestTree, MoodCheckin, SessionRecord};

#[derive(Debug, Default)]
struct Records {
    sessions: Vec<SessionRecord>,
    trees: Vec<ForestTree>,
    checkins: Vec<MoodCheckin>,
}

/// Record store backed by process memory. Never fails.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Records>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all kinds. Lets tests
    /// assert that the guest path never touches the store.
    pub fn record_count(&self) -> usize {
        let records = self.lock();
        records.sessions.len() + records.trees.len() + records.checkins.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append_session(
        &self,
        record: &SessionRecord,
    ) -> Result<SessionRecord, PersistenceError> {
        self.lock().sessions.push(record.clone());
        Ok(record.clone())
    }

    async fn append_tree(&self, record: &ForestTree) -> Result<ForestTree, PersistenceError> {
        self.lock().trees.push(record.clone());
        Ok(record.clone())
    }

    async fn append_mood_checkin(
        &self,
        record: &MoodCheckin,
    ) -> Result<MoodCheckin, PersistenceError> {
        self.lock().checkins.push(record.clone());
        Ok(record.clone())
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionRecord>, PersistenceError> {
        let mut sessions: Vec<SessionRecord> = self
            .lock()
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(sessions)
    }

    async fn list_trees(&self, user_id: &str) -> Result<Vec<ForestTree>, PersistenceError> {
        let mut trees: Vec<ForestTree> = self
            .lock()
            .trees
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trees.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at));
        Ok(trees)
    }

    async fn list_mood_checkins(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MoodCheckin>, PersistenceError> {
        let mut checkins: Vec<MoodCheckin> = self
            .lock()
            .checkins
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        checkins.sort_by(|a, b| b.date.cmp(&a.date));
        checkins.truncate(limit);
        Ok(checkins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionMode;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn session(user_id: &str, days_ago: i64) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            duration_secs: 300,
            mode: SessionMode::CalmFocus,
            started_at: Utc::now() - Duration::days(days_ago),
            mood_before: 3,
            mood_after: 4,
        }
    }

    #[tokio::test]
    async fn lists_are_scoped_to_the_user_and_date_descending() {
        let store = MemoryRecordStore::new();
        store.append_session(&session("alice", 2)).await.unwrap();
        store.append_session(&session("alice", 0)).await.unwrap();
        store.append_session(&session("bob", 1)).await.unwrap();

        let sessions = store.list_sessions("alice").await.unwrap();
        assert_eq!(sessions.len(), 2);
        assert!(sessions[0].started_at > sessions[1].started_at);
    }

    #[tokio::test]
    async fn checkin_list_honors_limit() {
        let store = MemoryRecordStore::new();
        for i in 0..5 {
            let checkin = MoodCheckin {
                id: Uuid::new_v4(),
                user_id: "alice".into(),
                date: (Utc::now() - Duration::days(i)).date_naive(),
                rating: 3,
                journal_text: None,
            };
            store.append_mood_checkin(&checkin).await.unwrap();
        }
        let checkins = store.list_mood_checkins("alice", 3).await.unwrap();
        assert_eq!(checkins.len(), 3);
        assert_eq!(checkins[0].date, Utc::now().date_naive());
    }
}
