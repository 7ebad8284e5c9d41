mod aggregate;
mod tracker;

pub use aggregate::{compute_streak, recompute, UserProgress, MOOD_HISTORY_LIMIT};
pub use tracker::ProgressTracker;
