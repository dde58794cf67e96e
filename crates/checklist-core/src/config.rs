//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ChecklistError, Result};
use crate::STORAGE_KEY;

/// Settings for one checklist widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistConfig {
    /// Key the state is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Audio asset played on completion.
    #[serde(default = "default_celebration_sound")]
    pub celebration_sound: String,

    /// Number of confetti pieces in the completion burst.
    #[serde(default = "default_confetti_pieces")]
    pub confetti_pieces: usize,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            celebration_sound: default_celebration_sound(),
            confetti_pieces: default_confetti_pieces(),
        }
    }
}

impl ChecklistConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ChecklistError::Config)
    }
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_celebration_sound() -> String {
    "/sounds/tada.mp3".to_string()
}

fn default_confetti_pieces() -> usize {
    200
}
