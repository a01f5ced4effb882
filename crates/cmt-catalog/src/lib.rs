//! # cmt-catalog — Practice Catalog Loading
//!
//! Turns a list of `(source, level)` dataset specs into an immutable
//! [`Catalog`] of practices. Sources may be local files or HTTP URLs; all
//! are fetched concurrently, and a source that fails to fetch is skipped
//! with a warning rather than failing the load. The catalog order is the
//! source-list order regardless of which fetch finishes first.
//!
//! Each dataset is CSV with a header row. Columns are resolved by
//! case-insensitive header text (`practice id`, `domain`, `practice name`,
//! `description`, `source`), never by position; a missing column yields
//! empty field values. Rows without a practice id are separator/blank rows
//! and are dropped. The level tag comes from the dataset spec, not from
//! the data.

mod catalog;
mod error;
mod loader;
mod source;

pub use catalog::{Catalog, CatalogSummary};
pub use error::CatalogError;
pub use loader::{load_catalog, parse_dataset};
pub use source::{read_manifest, DatasetSpec, PracticeSource};
