//! Assessment subcommands: save and clear records for a practice.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cmt_core::{AssessmentRecord, Scope, Status};

use crate::Session;

/// Arguments for `cmt assess`.
#[derive(Args, Debug)]
pub struct AssessArgs {
    #[command(subcommand)]
    pub command: AssessCommand,
}

/// Assessment operations on one practice.
#[derive(Subcommand, Debug)]
pub enum AssessCommand {
    /// Save (upsert) the assessment for a practice id.
    Set {
        /// The practice id to assess.
        id: String,

        /// Applicability: in or out.
        #[arg(long, default_value = "in")]
        scope: Scope,

        /// Implementation status: implemented, partial, not, na, or unknown.
        #[arg(long, default_value = "unknown")]
        status: Status,

        /// Free-form notes.
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove the saved assessment for a practice id, restoring defaults.
    Clear {
        /// The practice id to clear.
        id: String,
    },
}

/// Execute the assess subcommand against the loaded session.
pub fn run_assess(session: &mut Session, args: &AssessArgs) -> Result<u8> {
    match &args.command {
        AssessCommand::Set {
            id,
            scope,
            status,
            notes,
        } => {
            if session.catalog.find(id).is_none() {
                // Stale keys are tolerated by the store, but a typo is the
                // likelier explanation; say so without refusing.
                tracing::warn!(id = %id, "practice id not in the loaded catalog");
            }
            let record = AssessmentRecord {
                scope: *scope,
                status: *status,
                notes: notes.trim().to_string(),
            };
            session
                .store
                .save(id.clone(), record)
                .with_context(|| format!("saving assessment for '{id}'"))?;
            println!("Saved assessment for {id}.");

            let stats = session.store.statistics(&session.catalog);
            println!("{stats}");
            Ok(0)
        }
        AssessCommand::Clear { id } => {
            let removed = session
                .store
                .clear(id)
                .with_context(|| format!("clearing assessment for '{id}'"))?;
            if removed {
                println!("Cleared assessment for {id}; defaults apply.");
            } else {
                println!("No saved assessment for {id}; nothing to clear.");
            }
            Ok(0)
        }
    }
}
