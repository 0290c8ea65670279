//! Suitability tier for the aggregate score badge

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a site is rated High
pub const HIGH_THRESHOLD: u8 = 70;
/// Score at or above which a site is rated Medium
pub const MEDIUM_THRESHOLD: u8 = 50;

/// Colour role used by the UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    High,
    Medium,
    Low,
}

impl Suitability {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Suitability::High
        } else if score >= MEDIUM_THRESHOLD {
            Suitability::Medium
        } else {
            Suitability::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suitability::High => "High",
            Suitability::Medium => "Medium",
            Suitability::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Suitability::High => Tone::Success,
            Suitability::Medium => Tone::Warning,
            Suitability::Low => Tone::Destructive,
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
