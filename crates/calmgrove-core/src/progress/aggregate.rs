//! Derivation rules for user progress.
//!
//! `recompute` is a pure function of the full record set; it is never
//! mutated in place except for guest-mode optimistic increments handled
//! by the tracker.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{ForestTree, MoodCheckin, SessionRecord};

/// Mood history entries kept in a progress snapshot, most recent first.
pub const MOOD_HISTORY_LIMIT: usize = 30;

/// Derived progress statistics. Recomputed from records, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub total_meditations: u64,
    pub total_minutes: u64,
    pub current_streak: u32,
    pub trees: Vec<ForestTree>,
    pub mood_history: Vec<MoodCheckin>,
}

/// Recompute a progress snapshot from the full record set.
///
/// Totals come from the sessions; trees pass through; mood history is
/// capped to the most recent [`MOOD_HISTORY_LIMIT`] entries,
/// date-descending.
pub fn recompute(
    sessions: &[SessionRecord],
    trees: &[ForestTree],
    checkins: &[MoodCheckin],
) -> UserProgress {
    let mut mood_history: Vec<MoodCheckin> = checkins.to_vec();
    mood_history.sort_by(|a, b| b.date.cmp(&a.date));
    mood_history.truncate(MOOD_HISTORY_LIMIT);

    UserProgress {
        total_meditations: sessions.len() as u64,
        total_minutes: sessions.iter().map(SessionRecord::duration_minutes).sum(),
        current_streak: compute_streak(sessions, Utc::now().date_naive()),
        trees: trees.to_vec(),
        mood_history,
    }
}

/// Count the consecutive-day streak anchored at `today`.
///
/// Records are walked date-descending; record *i* extends the streak
/// only when its whole-day distance from `today` equals the streak
/// counted so far. A session today is required to start the count, so a
/// stale history yields zero. A second record on an already-counted day
/// terminates the walk -- preserved as observed, not redesigned.
pub fn compute_streak(sessions: &[SessionRecord], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = sessions.iter().map(|s| s.started_at.date_naive()).collect();
    dates.sort_by(|a, b| b.cmp(a));

    let mut streak: u32 = 0;
    for date in dates {
        let days_diff = (today - date).num_days();
        if days_diff == i64::from(streak) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
