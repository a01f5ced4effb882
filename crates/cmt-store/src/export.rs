//! Full-catalog CSV export.

use cmt_catalog::Catalog;

use crate::store::AssessmentStore;

/// Export column order.
pub const EXPORT_HEADER: [&str; 9] = [
    "Level",
    "Practice ID",
    "Domain",
    "Practice Name",
    "Description",
    "Source",
    "Scope",
    "Status",
    "Notes",
];

/// Render the whole catalog joined with the store as a CSV document.
///
/// One row per catalog practice, always the full catalog regardless of
/// any active view. Unsaved practices export their default record. Status
/// is rendered as its human label, and every field is quoted.
pub fn export_csv(catalog: &Catalog, store: &AssessmentStore) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(catalog.len() + 1);
    rows.push(EXPORT_HEADER.iter().map(|h| h.to_string()).collect());

    for practice in catalog {
        let record = store.record(&practice.id);
        rows.push(vec![
            practice.level.to_string(),
            practice.id.clone(),
            practice.domain.clone(),
            practice.name.clone(),
            practice.description.clone(),
            practice.source.clone(),
            record.scope.to_string(),
            record.status.label().to_string(),
            record.notes,
        ]);
    }

    cmt_csv::write_rows(&rows)
}
