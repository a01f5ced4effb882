//! # cmt-query — Views over the Practice Catalog
//!
//! Pure derivation of a view (a filtered, optionally sorted subsequence of
//! the catalog) from three independent predicates plus an optional sort
//! spec. Nothing here does IO and nothing here mutates the catalog; the
//! view is recomputed synchronously on every input change.
//!
//! [`DashboardState`] is the single owner of the inputs: catalog, filters,
//! sort, and the current selection. Consumers (the CLI today, any other
//! renderer tomorrow) read the derived view and never hold state of their
//! own.

mod filters;
mod sort;
mod state;
mod view;

pub use filters::{DomainFilter, Filters, LevelFilter};
pub use sort::{natural_cmp, SortDirection, SortField, SortSpec};
pub use state::DashboardState;
pub use view::build_view;
