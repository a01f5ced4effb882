//! # Assessment Vocabulary
//!
//! User-entered assessment state for a practice: whether it is in scope,
//! how far along implementation is, and free-form notes.
//!
//! A practice with no saved record is treated as having the all-default
//! record (`in` scope, status not set, empty notes). That rule lives here,
//! in `Default`/`#[serde(default)]`, so the persisted blob only ever stores
//! keys the user explicitly touched and older blobs with missing fields
//! still deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Whether a practice counts toward the assessment at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applicable to this organisation (the default).
    #[default]
    In,
    /// Excluded from the assessment.
    Out,
}

impl Scope {
    /// Wire/CLI form, `"in"` or `"out"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(ModelError::UnknownScope(s.to_string())),
        }
    }
}

/// Self-reported implementation state of a practice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Fully implemented.
    Implemented,
    /// Partially implemented.
    Partial,
    /// Not implemented.
    Not,
    /// Not applicable.
    Na,
    /// Not yet assessed (the default).
    #[default]
    Unknown,
}

impl Status {
    /// Wire/CLI form, matching the persisted blob vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Implemented => "implemented",
            Self::Partial => "partial",
            Self::Not => "not",
            Self::Na => "na",
            Self::Unknown => "unknown",
        }
    }

    /// Human label shown in tables and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Implemented => "Implemented",
            Self::Partial => "Partial",
            Self::Not => "Not Impl.",
            Self::Na => "N/A",
            Self::Unknown => "Not Set",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "implemented" => Ok(Self::Implemented),
            "partial" => Ok(Self::Partial),
            "not" => Ok(Self::Not),
            "na" => Ok(Self::Na),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// The user-entered assessment for one practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Applicability of the practice. Defaults to in scope.
    #[serde(default)]
    pub scope: Scope,
    /// Implementation status. Defaults to not set.
    #[serde(default)]
    pub status: Status,
    /// Free-form notes. Defaults to empty.
    #[serde(default)]
    pub notes: String,
}

impl AssessmentRecord {
    /// Whether every field still holds its default value. A record like
    /// this is indistinguishable from an absent one.
    pub fn is_default(&self) -> bool {
        self.scope == Scope::In && self.status == Status::Unknown && self.notes.is_empty()
    }
}
