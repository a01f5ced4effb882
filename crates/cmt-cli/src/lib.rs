//! # cmt-cli — CLI for the CMMC Practice Tracker
//!
//! Provides the `cmt` command-line interface: the presentation-layer
//! consumer of the catalog, query, and store crates. Handlers live one
//! module per subcommand family; `main.rs` only parses arguments and
//! dispatches.

pub mod assess;
pub mod catalog;
pub mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cmt_catalog::{load_catalog, read_manifest, Catalog, DatasetSpec};
use cmt_core::Level;
use cmt_store::{AssessmentStore, DEFAULT_STORE_FILE};

/// Default dataset locations, tried when no sources are given.
pub const DEFAULT_L1_SOURCE: &str = "data/L1_Practices.csv";
/// Default L2 dataset location.
pub const DEFAULT_L2_SOURCE: &str = "data/L2_Practices.csv";

/// Placeholder for blank detail fields.
pub const PLACEHOLDER: &str = "–";

/// Where the practice datasets come from. Shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct SourceOpts {
    /// Level 1 dataset (file path or http(s) URL). Repeatable.
    #[arg(long = "l1", value_name = "SRC", global = true)]
    pub l1: Vec<String>,

    /// Level 2 dataset (file path or http(s) URL). Repeatable.
    #[arg(long = "l2", value_name = "SRC", global = true)]
    pub l2: Vec<String>,

    /// JSON sources manifest: an array of {"source", "level"} objects,
    /// loaded before any --l1/--l2 sources.
    #[arg(long, value_name = "FILE", global = true)]
    pub sources: Option<PathBuf>,
}

impl SourceOpts {
    /// Resolve the dataset specs in load order: manifest entries first,
    /// then `--l1` sources, then `--l2` sources. With nothing given, the
    /// default data-directory locations are used.
    pub fn dataset_specs(&self) -> Result<Vec<DatasetSpec>> {
        let mut specs = Vec::new();

        if let Some(manifest) = &self.sources {
            specs.extend(
                read_manifest(manifest)
                    .with_context(|| format!("loading sources manifest {}", manifest.display()))?,
            );
        }
        for src in &self.l1 {
            specs.push(DatasetSpec::new(src, Level::L1)?);
        }
        for src in &self.l2 {
            specs.push(DatasetSpec::new(src, Level::L2)?);
        }

        if specs.is_empty() {
            specs.push(DatasetSpec::new(DEFAULT_L1_SOURCE, Level::L1)?);
            specs.push(DatasetSpec::new(DEFAULT_L2_SOURCE, Level::L2)?);
        }
        Ok(specs)
    }
}

/// A loaded session: the catalog plus the assessment store.
pub struct Session {
    /// The loaded practice catalog (possibly empty if all sources failed).
    pub catalog: Catalog,
    /// The assessment store, loaded from the blob path.
    pub store: AssessmentStore,
}

/// Load the catalog (blocking on the async fetches) and the store.
pub fn load_session(sources: &SourceOpts, store_path: Option<&PathBuf>) -> Result<Session> {
    let specs = sources.dataset_specs()?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let catalog = runtime.block_on(load_catalog(&specs));
    tracing::info!(practices = catalog.len(), "catalog loaded");

    let store = AssessmentStore::load(
        store_path
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
    );
    Ok(Session { catalog, store })
}

/// Render a possibly-blank field for detail output.
pub fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmt_catalog::PracticeSource;

    #[test]
    fn empty_opts_fall_back_to_default_sources() {
        let specs = SourceOpts::default().dataset_specs().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].level, Level::L1);
        assert_eq!(specs[1].level, Level::L2);
    }

    #[test]
    fn explicit_sources_suppress_defaults_and_keep_order() {
        let opts = SourceOpts {
            l1: vec!["one.csv".into()],
            l2: vec!["https://example.com/two.csv".into(), "three.csv".into()],
            sources: None,
        };
        let specs = opts.dataset_specs().unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].level, Level::L1);
        assert!(matches!(specs[1].source, PracticeSource::Http(_)));
        assert_eq!(specs[2].level, Level::L2);
    }

    #[test]
    fn manifest_entries_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("sources.json");
        std::fs::write(&manifest, r#"[{"source": "m.csv", "level": "L2"}]"#).unwrap();

        let opts = SourceOpts {
            l1: vec!["cli.csv".into()],
            l2: vec![],
            sources: Some(manifest),
        };
        let specs = opts.dataset_specs().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].level, Level::L2);
        assert_eq!(specs[1].level, Level::L1);
    }

    #[test]
    fn or_placeholder_substitutes_blanks_only() {
        assert_eq!(or_placeholder(""), PLACEHOLDER);
        assert_eq!(or_placeholder("value"), "value");
    }
}
