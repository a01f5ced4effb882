//! The assessment store and its whole-blob persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cmt_catalog::Catalog;
use cmt_core::{AssessmentRecord, Scope, Status};

use crate::error::StoreError;
use crate::stats::ReadinessStats;

/// Default blob file name. The version suffix changes if the blob
/// format ever does, so an old tool never misreads a new blob.
pub const DEFAULT_STORE_FILE: &str = "cmmc_assessments_v1.json";

/// Practice id → saved assessment record, persisted as one JSON object.
///
/// Keys are bare practice ids. A practice id appearing in both the L1 and
/// the L2 dataset shares one record; see DESIGN.md for why that stays.
/// Stale keys for practices no longer in any catalog are tolerated and
/// never pruned.
#[derive(Debug, Clone)]
pub struct AssessmentStore {
    path: PathBuf,
    records: BTreeMap<String, AssessmentRecord>,
}

impl AssessmentStore {
    /// Load the store from `path`. A missing file or an unparseable blob
    /// yields an empty store; neither is an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "assessment store unreadable, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "assessment store unreadable, starting empty"
                );
                BTreeMap::new()
            }
        };
        Self { path, records }
    }

    /// An empty store that persists to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// The backing blob path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of explicitly saved records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The saved record for `id`, if the user ever saved one.
    pub fn get(&self, id: &str) -> Option<&AssessmentRecord> {
        self.records.get(id)
    }

    /// The effective record for `id`: the saved one, or all defaults.
    pub fn record(&self, id: &str) -> AssessmentRecord {
        self.records.get(id).cloned().unwrap_or_default()
    }

    /// Iterate over saved `(id, record)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssessmentRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Upsert the record for `id` and persist the whole blob immediately.
    pub fn save(&mut self, id: impl Into<String>, record: AssessmentRecord) -> Result<(), StoreError> {
        self.records.insert(id.into(), record);
        self.persist()
    }

    /// Remove the record for `id` if present and persist. Returns whether
    /// a record was removed; clearing an absent id is a no-op, not an
    /// error.
    pub fn clear(&mut self, id: &str) -> Result<bool, StoreError> {
        let removed = self.records.remove(id).is_some();
        self.persist()?;
        Ok(removed)
    }

    /// Readiness statistics over a catalog: applicable counts every
    /// practice not marked out of scope, implemented counts the
    /// applicable ones marked implemented.
    pub fn statistics(&self, catalog: &Catalog) -> ReadinessStats {
        let mut applicable = 0;
        let mut implemented = 0;
        for practice in catalog {
            let record = self.record(&practice.id);
            if record.scope != Scope::Out {
                applicable += 1;
                if record.status == Status::Implemented {
                    implemented += 1;
                }
            }
        }
        ReadinessStats {
            applicable,
            implemented,
        }
    }

    /// Serialize the whole map and overwrite the blob file.
    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }
        std::fs::write(&self.path, blob).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
