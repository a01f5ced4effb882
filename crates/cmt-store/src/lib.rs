//! # cmt-store — Persisted Assessments
//!
//! A mapping from practice id to the user's [`AssessmentRecord`], backed
//! by a single JSON file that is rewritten whole after every mutation.
//! Only explicitly saved records are stored; an absent key means the
//! all-default record.
//!
//! Loading never fails: a missing or unparseable blob yields an empty
//! store with a warning, matching the degrade-and-continue contract of
//! the rest of the system. Writing is a real error, surfaced to the
//! caller, because losing a user's assessment silently is not acceptable.
//!
//! Derived readiness statistics and the full-catalog CSV export also live
//! here, since both are joins of catalog and store.

mod error;
mod export;
mod stats;
mod store;

pub use error::StoreError;
pub use export::{export_csv, EXPORT_HEADER};
pub use stats::ReadinessStats;
pub use store::{AssessmentStore, DEFAULT_STORE_FILE};

pub use cmt_core::AssessmentRecord;
