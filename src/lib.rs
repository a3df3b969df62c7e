//! Audit configured IP prefix-lists against a saved routing table.
//!
//! For every prefix-list entry the audit reports which routes it selects, the
//! protocol they were learned by, or that nothing in the table matches.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputFormat, ReportTarget};
use error::AuditResult;
use models::{FilterEntry, MatchResult, RouteEntry};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read and canonically sort the prefix-list entries.
pub fn get_sorted_filter_entries(path: &Path) -> AuditResult<Vec<FilterEntry>> {
    let entries = input::read_prefix_lists(path)?;
    Ok(processing::sort_filter_entries(entries))
}

/// Read and canonically sort the routing table.
pub fn get_sorted_routes(path: &Path) -> AuditResult<Vec<RouteEntry>> {
    let routes = input::read_ip_routes(path)?;
    Ok(processing::sort_route_entries(routes))
}

/// Run one audit: read both inputs, reconcile, write the report.
pub fn run(config: &Config) -> AuditResult<Vec<MatchResult>> {
    log::info!("#Start run()");

    let filters = get_sorted_filter_entries(&config.prefix_lists)?;
    let routes = get_sorted_routes(&config.routes)?;
    log::info!(
        "# Got {} prefix-list entries and {} routes",
        filters.len(),
        routes.len()
    );

    processing::log_duplicate_entries(&processing::check_for_duplicate_entries(&filters));

    let results = processing::reconcile(&filters, &routes, &config.protocols);

    // the summary goes to stderr when stdout carries the report
    match &config.output {
        ReportTarget::Stdout => write_outputs(
            &results,
            config,
            std::io::stdout().lock(),
            std::io::stderr().lock(),
        )?,
        ReportTarget::File(path) => {
            log::info!("Writing report to: {}", path.display());
            write_outputs(
                &results,
                config,
                BufWriter::new(File::create(path)?),
                std::io::stdout().lock(),
            )?
        }
    }

    Ok(results)
}

/// Write the report to `report` and, when enabled, the per-list summary to `summary`.
pub fn write_outputs<R: Write, S: Write>(
    rows: &[MatchResult],
    config: &Config,
    report: R,
    summary: S,
) -> AuditResult<()> {
    write_report(rows, config.format, report)?;
    if config.summary {
        output::write_summary(rows, summary)?;
    }
    Ok(())
}

/// Render the result rows in the chosen format.
pub fn write_report<W: Write>(
    rows: &[MatchResult],
    format: OutputFormat,
    out: W,
) -> AuditResult<()> {
    match format {
        OutputFormat::Csv => output::csv::write_report(rows, out),
        OutputFormat::Json => output::json::write_report(rows, out),
    }
}
