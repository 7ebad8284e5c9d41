mod breath;
mod engine;
mod mode;

pub use breath::{BreathCycle, BreathPhase};
pub use engine::{SessionEngine, SessionState};
pub use mode::SessionMode;
