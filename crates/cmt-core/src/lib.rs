//! # cmt-core — Model Types for the CMMC Practice Tracker
//!
//! This crate is the leaf of the workspace DAG. It defines the vocabulary
//! every other crate speaks: maturity levels, catalogued practices, and the
//! user-entered assessment records layered on top of them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cmt-*` crates.
//! - No IO. Loading, persistence, and rendering live elsewhere.
//! - All public types derive `Debug` and `Clone` and implement
//!   `Serialize`/`Deserialize`.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assessment;
pub mod error;
pub mod level;
pub mod practice;

pub use assessment::{AssessmentRecord, Scope, Status};
pub use error::ModelError;
pub use level::Level;
pub use practice::Practice;
