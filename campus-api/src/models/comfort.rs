use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-tier qualitative classification of a comfort score.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComfortLevel::Excellent => write!(f, "excellent"),
            ComfortLevel::Good => write!(f, "good"),
            ComfortLevel::Average => write!(f, "average"),
            ComfortLevel::Poor => write!(f, "poor"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortScore {
    /// Additive penalty score starting from 100, not clamped
    pub score: i32,
    /// Tier the score falls into
    pub level: ComfortLevel,
}
