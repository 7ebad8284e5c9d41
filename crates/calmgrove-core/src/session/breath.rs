//! Breathing-phase cycle.
//!
//! A small cyclic state machine that runs alongside the elapsed clock
//! during breathing sessions: inhale, hold, exhale, hold, repeating
//! indefinitely. Phase changes are cosmetic -- they drive a label and a
//! scale animation in the caller, nothing else.

use serde::{Deserialize, Serialize};

/// One phase of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreathPhase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl BreathPhase {
    /// Fixed per-phase duration in seconds.
    pub fn duration_secs(&self) -> u64 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::HoldIn => 2,
            BreathPhase::Exhale => 6,
            BreathPhase::HoldOut => 2,
        }
    }

    /// Label shown to the user while this phase is active.
    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in",
            BreathPhase::HoldIn | BreathPhase::HoldOut => "Hold",
            BreathPhase::Exhale => "Breathe out",
        }
    }

    /// The phase that follows this one in the cycle.
    pub fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::HoldIn,
            BreathPhase::HoldIn => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::HoldOut,
            BreathPhase::HoldOut => BreathPhase::Inhale,
        }
    }
}

/// Cyclic phase clock. Owned by the session engine and advanced one
/// second at a time; independent of the elapsed clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathCycle {
    phase: BreathPhase,
    /// Seconds spent in the current phase.
    elapsed_in_phase: u64,
}

impl BreathCycle {
    /// A fresh cycle, starting at `Inhale`.
    pub fn new() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            elapsed_in_phase: 0,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Advance the cycle by one second. Returns the new phase when a
    /// phase boundary is crossed.
    pub fn tick(&mut self) -> Option<BreathPhase> {
        self.elapsed_in_phase += 1;
        if self.elapsed_in_phase >= self.phase.duration_secs() {
            self.phase = self.phase.next();
            self.elapsed_in_phase = 0;
            return Some(self.phase);
        }
        None
    }

    /// Restart from `Inhale`. Called on resume: the cycle restarts
    /// rather than resuming mid-phase.
    pub fn restart(&mut self) {
        self.phase = BreathPhase::Inhale;
        self.elapsed_in_phase = 0;
    }
}

impl Default for BreathCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order_and_durations() {
        let mut cycle = BreathCycle::new();
        assert_eq!(cycle.phase(), BreathPhase::Inhale);

        // Inhale lasts 4 seconds.
        for _ in 0..3 {
            assert_eq!(cycle.tick(), None);
        }
        assert_eq!(cycle.tick(), Some(BreathPhase::HoldIn));

        // Hold lasts 2 seconds.
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.tick(), Some(BreathPhase::Exhale));

        // Exhale lasts 6 seconds.
        for _ in 0..5 {
            assert_eq!(cycle.tick(), None);
        }
        assert_eq!(cycle.tick(), Some(BreathPhase::HoldOut));

        // Final hold wraps back to inhale.
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.tick(), Some(BreathPhase::Inhale));
    }

    #[test]
    fn restart_goes_back_to_inhale() {
        let mut cycle = BreathCycle::new();
        for _ in 0..7 {
            cycle.tick();
        }
        assert_ne!(cycle.phase(), BreathPhase::Inhale);
        cycle.restart();
        assert_eq!(cycle.phase(), BreathPhase::Inhale);
        // A restarted cycle takes the full inhale duration again.
        for _ in 0..3 {
            assert_eq!(cycle.tick(), None);
        }
        assert_eq!(cycle.tick(), Some(BreathPhase::HoldIn));
    }

    #[test]
    fn full_cycle_is_fourteen_seconds() {
        let mut cycle = BreathCycle::new();
        let mut seconds = 0;
        loop {
            seconds += 1;
            if cycle.tick() == Some(BreathPhase::Inhale) {
                break;
            }
        }
        assert_eq!(seconds, 14);
    }
}
