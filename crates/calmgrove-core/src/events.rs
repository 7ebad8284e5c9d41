use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{BreathPhase, SessionMode, SessionState};

/// Every state change in the session engine produces an Event.
/// Callers poll or subscribe; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        mode: SessionMode,
        target_secs: u64,
        mood_before: u8,
        at: DateTime<Utc>,
    },
    SessionPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// The breathing cycle crossed a phase boundary.
    BreathPhaseChanged {
        phase: BreathPhase,
        at: DateTime<Utc>,
    },
    /// Elapsed time reached the target; the engine now waits for the
    /// post-session mood rating.
    SessionCompleted {
        mode: SessionMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        mode: Option<SessionMode>,
        elapsed_secs: u64,
        target_secs: u64,
        growth: f64,
        breath_phase: Option<BreathPhase>,
        at: DateTime<Utc>,
    },
}
