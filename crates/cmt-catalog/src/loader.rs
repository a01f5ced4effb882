//! Concurrent dataset fetching and CSV-to-practice mapping.

use cmt_core::{Level, Practice};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::source::{DatasetSpec, PracticeSource};

/// The fixed header names a dataset is expected to carry, matched
/// case-insensitively and in any order.
const COL_ID: &str = "practice id";
const COL_DOMAIN: &str = "domain";
const COL_NAME: &str = "practice name";
const COL_DESCRIPTION: &str = "description";
const COL_SOURCE: &str = "source";

/// Resolved column positions for one dataset. `None` means the column is
/// absent and every row gets an empty value for that field.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnMap {
    id: Option<usize>,
    domain: Option<usize>,
    name: Option<usize>,
    description: Option<usize>,
    source: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Self {
        let find = |wanted: &str| {
            header
                .iter()
                .position(|h| h.eq_ignore_ascii_case(wanted))
        };
        Self {
            id: find(COL_ID),
            domain: find(COL_DOMAIN),
            name: find(COL_NAME),
            description: find(COL_DESCRIPTION),
            source: find(COL_SOURCE),
        }
    }

    fn field(&self, row: &[String], col: Option<usize>) -> String {
        col.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    }
}

/// Parse one dataset's CSV text into practices tagged with `level`.
///
/// The first row is the header. Data rows whose resolved practice-id cell
/// is empty are blank/separator rows and are dropped.
pub fn parse_dataset(text: &str, level: Level) -> Vec<Practice> {
    let mut rows = cmt_csv::parse(text).into_iter();
    let header = match rows.next() {
        Some(h) => h,
        None => return Vec::new(),
    };
    let cols = ColumnMap::from_header(&header);

    rows.filter_map(|row| {
        let id = cols.field(&row, cols.id);
        if id.is_empty() {
            return None;
        }
        Some(Practice {
            id,
            domain: cols.field(&row, cols.domain),
            name: cols.field(&row, cols.name),
            description: cols.field(&row, cols.description),
            source: cols.field(&row, cols.source),
            level,
        })
    })
    .collect()
}

/// Fetch the raw text of one source.
async fn fetch_source(
    client: Option<&reqwest::Client>,
    source: &PracticeSource,
) -> Result<String, CatalogError> {
    match source {
        PracticeSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CatalogError::Read {
                    path: path.clone(),
                    source: e,
                })
        }
        PracticeSource::Http(url) => {
            let client = client.ok_or_else(|| CatalogError::NoHttpClient { url: url.clone() })?;
            let resp = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| CatalogError::Http {
                    url: url.clone(),
                    source: e,
                })?;
            if !resp.status().is_success() {
                return Err(CatalogError::HttpStatus {
                    url: url.clone(),
                    status: resp.status().as_u16(),
                });
            }
            resp.text().await.map_err(|e| CatalogError::Http {
                url: url.clone(),
                source: e,
            })
        }
    }
}

/// Load a catalog from the given dataset specs.
///
/// All sources are fetched concurrently; the catalog concatenates their
/// practices in source-list order, not completion order. A source that
/// fails to fetch is logged and skipped. Loading never fails: an empty
/// catalog is the worst case.
pub async fn load_catalog(specs: &[DatasetSpec]) -> Catalog {
    let client = match reqwest::Client::builder().build() {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(error = %e, "HTTP client unavailable; URL sources will be skipped");
            None
        }
    };

    let fetches = specs
        .iter()
        .map(|spec| fetch_source(client.as_ref(), &spec.source));
    let results = futures::future::join_all(fetches).await;

    let mut practices = Vec::new();
    for (spec, result) in specs.iter().zip(results) {
        match result {
            Ok(text) => {
                let loaded = parse_dataset(&text, spec.level);
                tracing::debug!(
                    source = %spec.source,
                    level = %spec.level,
                    practices = loaded.len(),
                    "dataset loaded"
                );
                practices.extend(loaded);
            }
            Err(e) => {
                tracing::warn!(source = %spec.source, error = %e, "skipping dataset");
            }
        }
    }

    Catalog::new(practices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Practice ID,Domain,Practice Name,Description,Source
AC.L1-3.1.1,Access Control,Authorized Access Control,\"Limit access, to authorized users.\",FAR 52.204-21
,,,,
AC.L1-3.1.2,Access Control,Transaction & Function Control,Limit access to transactions.,FAR 52.204-21
";

    #[test]
    fn maps_columns_by_header_text() {
        let practices = parse_dataset(SAMPLE, Level::L1);
        assert_eq!(practices.len(), 2);
        assert_eq!(practices[0].id, "AC.L1-3.1.1");
        assert_eq!(practices[0].description, "Limit access, to authorized users.");
        assert_eq!(practices[0].level, Level::L1);
    }

    #[test]
    fn rows_without_practice_id_are_dropped() {
        let practices = parse_dataset(SAMPLE, Level::L2);
        assert!(practices.iter().all(|p| !p.id.is_empty()));
        assert_eq!(practices.len(), 2);
    }

    #[test]
    fn column_order_is_irrelevant() {
        let text = "Source,Practice Name,PRACTICE ID\nNIST,Name Here,XY.1\n";
        let practices = parse_dataset(text, Level::L2);
        assert_eq!(practices.len(), 1);
        assert_eq!(practices[0].id, "XY.1");
        assert_eq!(practices[0].name, "Name Here");
        assert_eq!(practices[0].source, "NIST");
    }

    #[test]
    fn missing_columns_yield_empty_fields() {
        let text = "Practice ID\nAB.1\n";
        let practices = parse_dataset(text, Level::L1);
        assert_eq!(practices.len(), 1);
        assert_eq!(practices[0].domain, "");
        assert_eq!(practices[0].description, "");
    }

    #[test]
    fn missing_id_column_drops_every_row() {
        let text = "Domain,Practice Name\nAccess Control,Something\n";
        assert!(parse_dataset(text, Level::L1).is_empty());
    }

    #[test]
    fn empty_text_is_an_empty_dataset() {
        assert!(parse_dataset("", Level::L1).is_empty());
    }
}
