//! Pure view derivation.

use cmt_catalog::Catalog;
use cmt_core::Practice;

use crate::filters::Filters;
use crate::sort::SortSpec;

/// Derive the view: filter the catalog, then apply the optional sort.
///
/// Without a sort the result is a strict subsequence of the catalog in
/// catalog order. The sort is stable, so practices with equal keys keep
/// their relative catalog order.
pub fn build_view<'a>(
    catalog: &'a Catalog,
    filters: &Filters,
    sort: Option<SortSpec>,
) -> Vec<&'a Practice> {
    let mut view: Vec<&Practice> = catalog.iter().filter(|p| filters.matches(p)).collect();
    if let Some(spec) = sort {
        view.sort_by(|a, b| spec.compare(a, b));
    }
    view
}
