//! Sort fields, direction toggling, and numeric-aware ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cmt_core::{ModelError, Practice};

/// The sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Maturity level badge.
    Level,
    /// Practice identifier.
    Id,
    /// Domain label.
    Domain,
    /// Practice name.
    Name,
    /// Citation/reference.
    Source,
}

impl SortField {
    /// The key string this field extracts from a practice.
    pub fn key<'a>(&self, practice: &'a Practice) -> &'a str {
        match self {
            Self::Level => practice.level.as_str(),
            Self::Id => &practice.id,
            Self::Domain => &practice.domain,
            Self::Name => &practice.name,
            Self::Source => &practice.source,
        }
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level" => Ok(Self::Level),
            "id" => Ok(Self::Id),
            "domain" => Ok(Self::Domain),
            "name" => Ok(Self::Name),
            "source" => Ok(Self::Source),
            _ => Err(ModelError::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// An active sort: one field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The column being sorted.
    pub field: SortField,
    /// Current direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a field.
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Column-header click semantics: choosing the already-active field
    /// flips the direction, choosing a new field resets to ascending.
    pub fn toggle(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::ascending(field),
        }
    }

    /// Compare two practices under this spec.
    pub fn compare(&self, a: &Practice, b: &Practice) -> Ordering {
        let ord = natural_cmp(self.field.key(a), self.field.key(b));
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Case-insensitive, numeric-aware string ordering.
///
/// Runs of ASCII digits compare as whole numbers, so `AC-2` sorts before
/// `AC-10`. Everything else compares per lowercased character.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let da = take_digits(&mut ca);
                let db = take_digits(&mut cb);
                match cmp_digit_runs(&da, &db) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => {
                let xl = x.to_lowercase().next().unwrap_or(x);
                let yl = y.to_lowercase().next().unwrap_or(y);
                match xl.cmp(&yl) {
                    Ordering::Equal => {
                        ca.next();
                        cb.next();
                    }
                    ord => return ord,
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs as numbers without parsing: strip leading
/// zeros, then longer run wins, then lexicographic.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
