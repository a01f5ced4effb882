//! Error types for model-level parsing.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Parsing user input into the closed vocabulary enums is
//! the only fallible operation this crate exposes.

use thiserror::Error;

/// Errors from parsing strings into model vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The string is not a recognised maturity level.
    #[error("unknown level '{0}' (expected L1 or L2)")]
    UnknownLevel(String),

    /// The string is not a recognised assessment scope.
    #[error("unknown scope '{0}' (expected in or out)")]
    UnknownScope(String),

    /// The string is not a recognised implementation status.
    #[error("unknown status '{0}' (expected implemented, partial, not, na, or unknown)")]
    UnknownStatus(String),

    /// The string is not a recognised sort field.
    #[error("unknown sort field '{0}' (expected level, id, domain, name, or source)")]
    UnknownSortField(String),
}
