//! Filter predicates over practices.

use serde::{Deserialize, Serialize};

use cmt_core::{Level, Practice};

/// Level predicate: everything, or one tier only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelFilter {
    /// No level restriction.
    #[default]
    All,
    /// Only practices at this level.
    Only(Level),
}

/// Domain predicate: everything, or one exact domain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainFilter {
    /// No domain restriction.
    #[default]
    All,
    /// Only practices whose domain matches exactly.
    Only(String),
}

/// The three independent predicates, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Level restriction.
    pub level: LevelFilter,
    /// Domain restriction (exact match).
    pub domain: DomainFilter,
    /// Free-text query; case-insensitive substring match over all five
    /// string fields. Empty matches everything.
    pub query: String,
}

impl Filters {
    /// Whether a practice passes all three predicates.
    pub fn matches(&self, practice: &Practice) -> bool {
        if let LevelFilter::Only(level) = self.level {
            if practice.level != level {
                return false;
            }
        }
        if let DomainFilter::Only(ref domain) = self.domain {
            if &practice.domain != domain {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !practice.search_haystack().contains(&query) {
            return false;
        }
        true
    }
}
