//! The dashboard state controller.
//!
//! One struct owns the catalog, the active filters, the sort spec, and
//! the selected row. Renderers receive the derived view and never hold
//! or mutate state of their own.

use cmt_catalog::Catalog;
use cmt_core::Practice;

use crate::filters::{DomainFilter, Filters, LevelFilter};
use crate::sort::{SortField, SortSpec};
use crate::view::build_view;

/// Catalog + filters + sort + selection, with every mutation keeping the
/// selection valid for the recomputed view.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    catalog: Catalog,
    filters: Filters,
    sort: Option<SortSpec>,
    selection: Option<usize>,
}

impl DashboardState {
    /// Start a session over a freshly loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active filters.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Derive the current view. Recomputed on every call; the state holds
    /// no cached rows.
    pub fn view(&self) -> Vec<&Practice> {
        build_view(&self.catalog, &self.filters, self.sort)
    }

    /// Replace the level filter and re-clamp the selection.
    pub fn set_level_filter(&mut self, level: LevelFilter) {
        self.filters.level = level;
        self.clamp_selection();
    }

    /// Replace the domain filter and re-clamp the selection.
    pub fn set_domain_filter(&mut self, domain: DomainFilter) {
        self.filters.domain = domain;
        self.clamp_selection();
    }

    /// Replace the search query and re-clamp the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
        self.clamp_selection();
    }

    /// Column-header click: toggle or reset the sort, keep the selection
    /// clamped to the (re-ordered) view.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(SortSpec::toggle(self.sort, field));
        self.clamp_selection();
    }

    /// Select a row by view index. Out-of-range indices are ignored and
    /// the previous selection kept.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.view().len() {
            self.selection = Some(index);
            true
        } else {
            false
        }
    }

    /// The selected practice under the current view, if any.
    pub fn selected(&self) -> Option<&Practice> {
        let view = self.view();
        self.selection.and_then(|i| view.get(i).copied())
    }

    /// Keep the selection inside the current view: clamp to the last row
    /// when the view shrank, clear it when the view emptied.
    fn clamp_selection(&mut self) {
        let len = self.view().len();
        self.selection = match (self.selection, len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }
}
