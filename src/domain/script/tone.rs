//! Tone of the composed script.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Phrasing style blended into composed replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Soft,
    #[default]
    Confident,
    Expert,
}

impl Tone {
    /// Returns all tones in rotation order.
    pub fn all() -> &'static [Tone] {
        &[Tone::Soft, Tone::Confident, Tone::Expert]
    }

    /// Next tone in the soft → confident → expert → soft cycle.
    pub fn next(&self) -> Tone {
        match self {
            Tone::Soft => Tone::Confident,
            Tone::Confident => Tone::Expert,
            Tone::Expert => Tone::Soft,
        }
    }

    /// Russian name shown on the tone button.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Soft => "мягкий",
            Tone::Confident => "уверенный",
            Tone::Expert => "эксперт",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    /// Accepts both the config key (`soft`) and the display name (`мягкий`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soft" | "мягкий" => Ok(Tone::Soft),
            "confident" | "уверенный" => Ok(Tone::Confident),
            "expert" | "эксперт" => Ok(Tone::Expert),
            other => Err(ValidationError::unknown_value("tone", other)),
        }
    }
}
