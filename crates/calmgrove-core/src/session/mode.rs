//! Session modes and their tree-species derivation.

use serde::{Deserialize, Serialize};

/// The kind of wellness session being run.
///
/// Serialized in kebab-case to match the record store wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    CalmFocus,
    DeepSleep,
    FocusGarden,
    Breathing,
}

impl SessionMode {
    /// Wire identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::CalmFocus => "calm-focus",
            SessionMode::DeepSleep => "deep-sleep",
            SessionMode::FocusGarden => "focus-garden",
            SessionMode::Breathing => "breathing",
        }
    }

    /// Species of the forest tree unlocked by completing a session
    /// in this mode. Fixed lookup table.
    pub fn tree_species(&self) -> &'static str {
        match self {
            SessionMode::CalmFocus => "Serenity Oak",
            SessionMode::DeepSleep => "Moonlit Willow",
            SessionMode::FocusGarden => "Sunrise Maple",
            SessionMode::Breathing => "Whispering Pine",
        }
    }

    /// Whether this mode drives the breathing-phase cycle.
    pub fn has_breath_cycle(&self) -> bool {
        matches!(self, SessionMode::Breathing)
    }
}

impl std::str::FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm-focus" => Ok(SessionMode::CalmFocus),
            "deep-sleep" => Ok(SessionMode::DeepSleep),
            "focus-garden" => Ok(SessionMode::FocusGarden),
            "breathing" => Ok(SessionMode::Breathing),
            other => Err(format!("unknown session mode: {other}")),
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
