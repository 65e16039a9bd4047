//! Dialog behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::script::Tone;

pub const MIN_DIGEST_TURNS: usize = 1;
pub const MAX_DIGEST_TURNS: usize = 20;

/// Per-session dialog defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DialogConfig {
    /// Tone new sessions start in
    #[serde(default)]
    pub default_tone: Tone,

    /// Most recent turns folded into a summary digest
    #[serde(default = "default_digest_turns")]
    pub digest_turns: usize,
}

impl DialogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_DIGEST_TURNS..=MAX_DIGEST_TURNS).contains(&self.digest_turns) {
            return Err(ValidationError::InvalidDigestTurns {
                value: self.digest_turns,
                min: MIN_DIGEST_TURNS,
                max: MAX_DIGEST_TURNS,
            });
        }
        Ok(())
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            default_tone: Tone::default(),
            digest_turns: default_digest_turns(),
        }
    }
}

fn default_digest_turns() -> usize {
    5
}
