//! Record types shared between the session engine, the progress
//! aggregator, and the record store.
//!
//! Wire format is camelCase JSON. Records are immutable once stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::session::SessionMode;

/// Minutes of session time required to grow a tree by one level.
pub const MINUTES_PER_GROWTH_LEVEL: u64 = 5;

/// A completed, stored wellness session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: String,
    pub duration_secs: u64,
    pub mode: SessionMode,
    pub started_at: DateTime<Utc>,
    pub mood_before: u8,
    pub mood_after: u8,
}

impl SessionRecord {
    /// Whole minutes of this session, rounded down.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_secs / 60
    }
}

/// A daily mood check-in. At most one meaningful entry per calendar day
/// per user; the caller enforces the "logged today" rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCheckin {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_text: Option<String>,
}

/// A tree in the user's forest, unlocked by completing a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForestTree {
    pub id: Uuid,
    pub user_id: String,
    pub species: String,
    pub growth_level: u32,
    pub unlocked_at: DateTime<Utc>,
}

impl ForestTree {
    /// Derive the tree unlocked by a completed session: species keyed by
    /// mode, growth level one per five minutes of session time.
    pub fn from_session(session: &SessionRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id.clone(),
            species: session.mode.tree_species().to_string(),
            growth_level: (session.duration_minutes() / MINUTES_PER_GROWTH_LEVEL) as u32,
            unlocked_at: Utc::now(),
        }
    }
}

/// Summary of a finished session produced by the engine. The progress
/// tracker attaches identity and materializes the `SessionRecord`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSession {
    pub mode: SessionMode,
    pub duration_secs: u64,
    pub started_at: DateTime<Utc>,
    pub mood_before: u8,
    pub mood_after: u8,
}

/// Validate a 1-5 mood rating.
pub fn validate_rating(value: u8) -> Result<u8, ValidationError> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidRating { value })
    }
}
