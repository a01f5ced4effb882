//! Catalog browsing subcommands: summary, list, domains, show.

use anyhow::{bail, Result};
use clap::Args;

use cmt_core::Level;
use cmt_query::{DashboardState, DomainFilter, LevelFilter, SortField};

use crate::{or_placeholder, Session};

/// Arguments for `cmt list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only practices at this level (L1 or L2).
    #[arg(long)]
    pub level: Option<Level>,

    /// Only practices in this exact domain.
    #[arg(long)]
    pub domain: Option<String>,

    /// Case-insensitive free-text search across all fields.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by column: level, id, domain, name, or source.
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

/// `cmt summary`: headline catalog counts plus readiness figures.
pub fn run_summary(session: &Session) -> Result<u8> {
    let summary = session.catalog.summary();
    let stats = session.store.statistics(&session.catalog);

    println!("Practices:   {}", summary.total);
    println!("  Level 1:   {}", summary.level1);
    println!("  Level 2:   {}", summary.level2);
    println!("Domains:     {}", summary.domains);
    println!("Applicable:  {}", stats.applicable);
    println!("Implemented: {}", stats.implemented);
    println!("Readiness:   {}", stats.readiness_display());
    Ok(0)
}

/// `cmt list`: render the filtered/sorted view as a table.
pub fn run_list(session: &Session, args: &ListArgs) -> Result<u8> {
    let mut state = DashboardState::new(session.catalog.clone());
    if let Some(level) = args.level {
        state.set_level_filter(LevelFilter::Only(level));
    }
    if let Some(domain) = &args.domain {
        state.set_domain_filter(DomainFilter::Only(domain.clone()));
    }
    if let Some(search) = &args.search {
        state.set_query(search.clone());
    }
    if let Some(field) = args.sort {
        state.toggle_sort(field);
        if args.desc {
            // A second toggle of the same field flips to descending.
            state.toggle_sort(field);
        }
    }

    let view = state.view();
    if view.is_empty() {
        println!("No practices match the current filters.");
        return Ok(0);
    }

    println!(
        "{:<5} {:<15} {:<32} {:<44} {}",
        "Level", "Practice ID", "Domain", "Practice Name", "Status"
    );
    for practice in &view {
        let record = session.store.record(&practice.id);
        println!(
            "{:<5} {:<15} {:<32} {:<44} {}",
            practice.level,
            practice.id,
            truncate(&practice.domain, 32),
            truncate(&practice.name, 44),
            record.status.label()
        );
    }
    println!();
    println!("{} of {} practices", view.len(), session.catalog.len());
    Ok(0)
}

/// `cmt domains`: the sorted unique domain list.
pub fn run_domains(session: &Session) -> Result<u8> {
    for domain in session.catalog.domains() {
        println!("{domain}");
    }
    Ok(0)
}

/// `cmt show <id>`: the detail panel for one practice.
pub fn run_show(session: &Session, id: &str) -> Result<u8> {
    let Some(practice) = session.catalog.find(id) else {
        bail!("no practice with id '{id}' in the loaded catalog");
    };
    let record = session.store.record(&practice.id);

    println!("Practice:    {}", or_placeholder(&practice.id));
    println!("Level:       {}", practice.level.long_label());
    println!("Domain:      {}", or_placeholder(&practice.domain));
    println!("Name:        {}", or_placeholder(&practice.name));
    println!("Description: {}", or_placeholder(&practice.description));
    println!("Source:      {}", or_placeholder(&practice.source));
    println!();
    println!("Scope:       {}", record.scope);
    println!("Status:      {}", record.status.label());
    println!("Notes:       {}", or_placeholder(&record.notes));
    Ok(0)
}

/// Cut a cell down to the column width, marking the cut with an ellipsis.
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
