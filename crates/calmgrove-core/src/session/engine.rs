//! Session engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or timers - the caller is responsible for calling `tick()`
//! once per second of session time.
//!
//! ## State Transitions
//!
//! ```text
//! Setup -> Active <-> Paused
//!            |
//!            v (elapsed >= target)
//!        Complete
//! ```
//!
//! `reset()` returns to `Setup` from any state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = SessionEngine::new();
//! engine.start(SessionMode::Breathing, 300, 3)?;
//! // Once per second:
//! engine.tick(); // Returns Some(Event) on phase change or completion
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::breath::BreathCycle;
use super::mode::SessionMode;
use crate::error::ValidationError;
use crate::events::Event;
use crate::records::{validate_rating, CompletedSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Duration and pre-session mood are being chosen.
    Setup,
    Active,
    Paused,
    /// Elapsed reached target; waiting for the post-session mood rating.
    Complete,
}

impl SessionState {
    fn as_str(&self) -> &'static str {
        match self {
            SessionState::Setup => "setup",
            SessionState::Active => "active",
            SessionState::Paused => "paused",
            SessionState::Complete => "complete",
        }
    }
}

/// Core session engine.
///
/// Operates on logical one-second ticks -- no internal thread, no wall
/// clock. Serializable so a CLI can persist it between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    state: SessionState,
    mode: Option<SessionMode>,
    target_secs: u64,
    elapsed_secs: u64,
    mood_before: u8,
    started_at: Option<DateTime<Utc>>,
    /// Phase cycle, present only for breathing sessions.
    #[serde(default)]
    breath: Option<BreathCycle>,
}

impl SessionEngine {
    /// Create a new engine in the `Setup` state.
    pub fn new() -> Self {
        Self {
            state: SessionState::Setup,
            mode: None,
            target_secs: 0,
            elapsed_secs: 0,
            mood_before: 0,
            started_at: None,
            breath: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn target_secs(&self) -> u64 {
        self.target_secs
    }

    /// Current breathing phase, if a breathing session is underway.
    pub fn breath_phase(&self) -> Option<super::breath::BreathPhase> {
        self.breath.as_ref().map(|c| c.phase())
    }

    /// 0.0 .. 1.0 progress toward the target duration. Drives the
    /// tree-growth visual.
    pub fn growth(&self) -> f64 {
        if self.target_secs == 0 {
            return 0.0;
        }
        (self.elapsed_secs as f64 / self.target_secs as f64).min(1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            elapsed_secs: self.elapsed_secs,
            target_secs: self.target_secs,
            growth: self.growth(),
            breath_phase: self.breath_phase(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a session: `Setup -> Active`. Starts the elapsed clock and,
    /// for breathing mode, the phase cycle.
    ///
    /// # Errors
    /// `InvalidDuration` if `target_secs` is zero, `InvalidRating` if the
    /// pre-session mood is outside 1-5, `InvalidState` outside `Setup`.
    pub fn start(
        &mut self,
        mode: SessionMode,
        target_secs: u64,
        mood_before: u8,
    ) -> Result<Event, ValidationError> {
        if self.state != SessionState::Setup {
            return Err(ValidationError::InvalidState {
                operation: "start",
                state: self.state.as_str(),
            });
        }
        if target_secs == 0 {
            return Err(ValidationError::InvalidDuration { seconds: 0 });
        }
        validate_rating(mood_before)?;

        self.state = SessionState::Active;
        self.mode = Some(mode);
        self.target_secs = target_secs;
        self.elapsed_secs = 0;
        self.mood_before = mood_before;
        self.started_at = Some(Utc::now());
        self.breath = mode.has_breath_cycle().then(BreathCycle::new);

        Ok(Event::SessionStarted {
            mode,
            target_secs,
            mood_before,
            at: Utc::now(),
        })
    }

    /// Suspend both clocks. No-op outside `Active`.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Paused;
                Some(Event::SessionPaused {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Continue from the same elapsed value. The breathing cycle
    /// restarts from `Inhale` rather than resuming mid-phase.
    /// No-op outside `Paused`.
    pub fn resume(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Paused => {
                self.state = SessionState::Active;
                if let Some(cycle) = self.breath.as_mut() {
                    cycle.restart();
                }
                Some(Event::SessionResumed {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Advance both clocks by one second. Idempotent no-op unless
    /// `Active`. Returns `SessionCompleted` when the target is reached,
    /// `BreathPhaseChanged` when the phase cycle crosses a boundary.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.target_secs {
            self.state = SessionState::Complete;
            return Some(Event::SessionCompleted {
                mode: self.mode?,
                duration_secs: self.target_secs,
                at: Utc::now(),
            });
        }
        if let Some(phase) = self.breath.as_mut().and_then(BreathCycle::tick) {
            return Some(Event::BreathPhaseChanged {
                phase,
                at: Utc::now(),
            });
        }
        None
    }

    /// Collect the post-session mood and yield the finished-session
    /// summary. Only valid in `Complete`; the engine returns to `Setup`.
    ///
    /// # Errors
    /// `InvalidState` outside `Complete`, `InvalidRating` for a mood
    /// outside 1-5.
    pub fn finish(&mut self, mood_after: u8) -> Result<CompletedSession, ValidationError> {
        let (SessionState::Complete, Some(mode)) = (self.state, self.mode) else {
            return Err(ValidationError::InvalidState {
                operation: "finish",
                state: self.state.as_str(),
            });
        };
        validate_rating(mood_after)?;

        let completed = CompletedSession {
            mode,
            duration_secs: self.target_secs,
            started_at: self.started_at.unwrap_or_else(Utc::now),
            mood_before: self.mood_before,
            mood_after,
        };
        self.clear();
        Ok(completed)
    }

    /// Return to `Setup`, discarding all elapsed and phase state.
    /// Valid from any state.
    pub fn reset(&mut self) -> Event {
        self.clear();
        Event::SessionReset { at: Utc::now() }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn clear(&mut self) {
        self.state = SessionState::Setup;
        self.mode = None;
        self.target_secs = 0;
        self.elapsed_secs = 0;
        self.mood_before = 0;
        self.started_at = None;
        self.breath = None;
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new()
    }
}
