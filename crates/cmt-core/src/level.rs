//! # Maturity Level
//!
//! The two CMMC maturity tiers tracked by this tool. A practice's level is
//! assigned by which dataset it was loaded from, never by a column in the
//! data itself, so the enum stays closed and every `match` on it is
//! exhaustive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Maturity tier of a practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Level 1, foundational safeguarding requirements.
    L1,
    /// Level 2, advanced practices aligned to NIST SP 800-171.
    L2,
}

impl Level {
    /// Short badge form, `"L1"` or `"L2"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }

    /// Long form used in detail panels.
    pub fn long_label(&self) -> &'static str {
        match self {
            Self::L1 => "Level 1 – Foundational",
            Self::L2 => "Level 2 – Advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L1" | "1" => Ok(Self::L1),
            "L2" | "2" => Ok(Self::L2),
            _ => Err(ModelError::UnknownLevel(s.to_string())),
        }
    }
}
