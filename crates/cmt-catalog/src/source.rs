//! Dataset sources and the optional JSON sources manifest.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use cmt_core::Level;

use crate::error::CatalogError;

/// Where a practice dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeSource {
    /// A local CSV file.
    File(PathBuf),
    /// A CSV document fetched over HTTP(S).
    Http(Url),
}

impl FromStr for PracticeSource {
    type Err = CatalogError;

    /// Classify a source string. Anything starting with `http://` or
    /// `https://` must parse as a URL; everything else is a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|e| CatalogError::InvalidSource {
                value: s.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Self::Http(url))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for PracticeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

/// One dataset to load: a source plus the level tag applied to every
/// practice it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Where to fetch the CSV from.
    pub source: PracticeSource,
    /// Level assigned to every practice in this dataset.
    pub level: Level,
}

impl DatasetSpec {
    /// Build a spec from a raw source string and a level.
    pub fn new(source: &str, level: Level) -> Result<Self, CatalogError> {
        Ok(Self {
            source: source.parse()?,
            level,
        })
    }
}

/// One entry in the JSON sources manifest.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    source: String,
    level: Level,
}

/// Read a sources manifest: a JSON array of `{"source": ..., "level": ...}`
/// objects, in load order.
pub fn read_manifest(path: &Path) -> Result<Vec<DatasetSpec>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&text).map_err(|e| CatalogError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    entries
        .into_iter()
        .map(|e| DatasetSpec::new(&e.source, e.level))
        .collect()
}
