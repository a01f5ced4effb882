//! Reporting subcommands: readiness statistics and CSV export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cmt_store::export_csv;

use crate::Session;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "cmmc_assessment.csv";

/// Arguments for `cmt export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output path for the CSV document.
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    pub out: PathBuf,
}

/// `cmt stats`: the assessment figures on their own.
///
/// An empty (or entirely failed-to-load) catalog renders placeholders
/// rather than zeros masquerading as measurements.
pub fn run_stats(session: &Session) -> Result<u8> {
    if session.catalog.is_empty() {
        println!("Applicable:  –");
        println!("Implemented: –");
        println!("Readiness:   –");
        return Ok(0);
    }

    let stats = session.store.statistics(&session.catalog);
    println!("Applicable:  {}", stats.applicable);
    println!("Implemented: {}", stats.implemented);
    println!("Readiness:   {}", stats.readiness_display());
    Ok(0)
}

/// `cmt export`: write the full catalog joined with assessments as CSV.
pub fn run_export(session: &Session, args: &ExportArgs) -> Result<u8> {
    if session.catalog.is_empty() {
        println!("Nothing to export: the catalog is empty.");
        return Ok(0);
    }

    let csv = export_csv(&session.catalog, &session.store);
    std::fs::write(&args.out, csv)
        .with_context(|| format!("writing export to {}", args.out.display()))?;
    println!(
        "Exported {} practices to {}.",
        session.catalog.len(),
        args.out.display()
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmt_catalog::Catalog;
    use cmt_core::{Level, Practice};
    use cmt_store::AssessmentStore;

    fn session(dir: &tempfile::TempDir, practices: Vec<Practice>) -> Session {
        Session {
            catalog: Catalog::new(practices),
            store: AssessmentStore::load(dir.path().join("store.json")),
        }
    }

    fn practice(id: &str) -> Practice {
        Practice {
            id: id.into(),
            domain: "Access Control".into(),
            name: "Some Name".into(),
            description: String::new(),
            source: String::new(),
            level: Level::L1,
        }
    }

    #[test]
    fn export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(&dir, vec![practice("AC.1"), practice("AC.2")]);
        let out = dir.path().join("out.csv");
        let args = ExportArgs { out: out.clone() };

        assert_eq!(run_export(&s, &args).unwrap(), 0);
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("\"Level\""));
    }

    #[test]
    fn empty_catalog_exports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(&dir, vec![]);
        let out = dir.path().join("out.csv");
        let args = ExportArgs { out: out.clone() };

        assert_eq!(run_export(&s, &args).unwrap(), 0);
        assert!(!out.exists());
    }
}
