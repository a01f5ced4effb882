//! # Practice
//!
//! A single catalogued security practice. Practices are immutable once
//! loaded: the catalog is built in one pass at startup and never mutated,
//! so the struct carries plain owned strings and no interior mutability.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// One catalogued control/requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Practice identifier, e.g. `AC.L1-3.1.1`. Unique within a level's
    /// dataset; assessments key on this string alone.
    pub id: String,
    /// Grouping label, e.g. `Access Control`.
    pub domain: String,
    /// Short title.
    pub name: String,
    /// Free-text description of the requirement.
    pub description: String,
    /// Citation/reference for the requirement.
    pub source: String,
    /// Maturity tier, assigned from the dataset the row came from.
    pub level: Level,
}

impl Practice {
    /// Lower-cased haystack for free-text search: all five string fields
    /// space-joined, matching what a user sees in the table row.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id, self.domain, self.name, self.description, self.source
        )
        .to_lowercase()
    }
}
