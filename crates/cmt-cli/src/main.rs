//! # cmt CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; all catalog/store work happens in the handler
//! modules of the library crate.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmt_cli::assess::{run_assess, AssessArgs};
use cmt_cli::catalog::{run_domains, run_list, run_show, run_summary, ListArgs};
use cmt_cli::report::{run_export, run_stats, ExportArgs};
use cmt_cli::{load_session, SourceOpts};

/// CMMC practice tracker.
///
/// Loads the practice catalog from CSV datasets, tracks per-practice
/// assessments in a local JSON store, and reports readiness.
#[derive(Parser, Debug)]
#[command(name = "cmt", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the assessment store blob.
    #[arg(long, value_name = "FILE", global = true)]
    store: Option<PathBuf>,

    #[command(flatten)]
    sources: SourceOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Headline catalog counts and readiness figures.
    Summary,

    /// List practices, filtered and optionally sorted.
    List(ListArgs),

    /// Show one practice in full, including its assessment.
    Show {
        /// The practice id to show.
        id: String,
    },

    /// List the distinct practice domains.
    Domains,

    /// Save or clear the assessment for a practice.
    Assess(AssessArgs),

    /// Applicable/implemented counts and the readiness percentage.
    Stats,

    /// Export the full catalog joined with assessments as CSV.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = load_session(&cli.sources, cli.store.as_ref()).and_then(|mut session| {
        match &cli.command {
            Commands::Summary => run_summary(&session),
            Commands::List(args) => run_list(&session, args),
            Commands::Show { id } => run_show(&session, id),
            Commands::Domains => run_domains(&session),
            Commands::Assess(args) => run_assess(&mut session, args),
            Commands::Stats => run_stats(&session),
            Commands::Export(args) => run_export(&session, args),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmt_core::{Level, Scope, Status};
    use cmt_query::SortField;

    #[test]
    fn cli_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "cmt", "list", "--level", "L1", "--domain", "Access Control", "--search", "cui",
            "--sort", "id", "--desc",
        ])
        .unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.level, Some(Level::L1));
        assert_eq!(args.domain.as_deref(), Some("Access Control"));
        assert_eq!(args.search.as_deref(), Some("cui"));
        assert_eq!(args.sort, Some(SortField::Id));
        assert!(args.desc);
    }

    #[test]
    fn cli_parse_desc_requires_sort() {
        assert!(Cli::try_parse_from(["cmt", "list", "--desc"]).is_err());
    }

    #[test]
    fn cli_parse_assess_set_defaults() {
        let cli = Cli::try_parse_from(["cmt", "assess", "set", "AC.L1-3.1.1"]).unwrap();
        let Commands::Assess(args) = cli.command else {
            panic!("expected assess");
        };
        let cmt_cli::assess::AssessCommand::Set {
            id,
            scope,
            status,
            notes,
        } = args.command
        else {
            panic!("expected set");
        };
        assert_eq!(id, "AC.L1-3.1.1");
        assert_eq!(scope, Scope::In);
        assert_eq!(status, Status::Unknown);
        assert!(notes.is_empty());
    }

    #[test]
    fn cli_parse_rejects_unknown_status() {
        assert!(
            Cli::try_parse_from(["cmt", "assess", "set", "AC.1", "--status", "done"]).is_err()
        );
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cmt", "summary", "--store", "alt.json", "--l1", "l1.csv", "--l2", "l2.csv",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("alt.json")));
        assert_eq!(cli.sources.l1, vec!["l1.csv"]);
        assert_eq!(cli.sources.l2, vec!["l2.csv"]);
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn cli_parse_export_default_out() {
        let cli = Cli::try_parse_from(["cmt", "export"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.out, PathBuf::from(cmt_cli::report::DEFAULT_EXPORT_FILE));
    }
}
