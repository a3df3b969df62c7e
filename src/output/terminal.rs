//! Terminal output utilities.
//!
//! Provides formatting helpers and the per-list summary printed after a run.

use crate::error::AuditResult;
use crate::models::{MatchOutcome, MatchResult};
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Per prefix-list counts of filter entries by outcome.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListSummary {
    /// Entries with at least one matching route.
    pub matched: usize,
    pub unmatched: usize,
    pub not_checked: usize,
    /// Total matched route rows.
    pub routes: usize,
}

/// Count entries per prefix-list. An entry is identified by its position in the input.
pub fn summarize(rows: &[MatchResult]) -> BTreeMap<String, ListSummary> {
    let mut summary: BTreeMap<String, ListSummary> = BTreeMap::new();
    let mut last_entry: Option<usize> = None;

    for row in rows {
        let list = summary.entry(row.list_name.clone()).or_default();
        let first_row_of_entry = last_entry != Some(row.entry);
        last_entry = Some(row.entry);

        match row.outcome {
            MatchOutcome::Matched { .. } => {
                list.routes += 1;
                if first_row_of_entry {
                    list.matched += 1;
                }
            }
            MatchOutcome::NoMatch => list.unmatched += 1,
            MatchOutcome::NotChecked => list.not_checked += 1,
        }
    }
    summary
}

/// Write the per-list summary to `out`.
pub fn write_summary<W: Write>(rows: &[MatchResult], mut out: W) -> AuditResult<()> {
    let summary = summarize(rows);
    log::info!("#Start write_summary() lists={}", summary.len());

    writeln!(
        out,
        "{},{},{},{},{}",
        format_field("prefix_list", 24),
        format_field("matched", 10),
        format_field("unmatched", 12),
        format_field("not_checked", 14),
        format_field("routes", 9),
    )?;
    for (list_name, counts) in &summary {
        let unmatched = format_field(counts.unmatched, 12);
        let unmatched = if counts.unmatched > 0 {
            unmatched.red().to_string()
        } else {
            unmatched.green().to_string()
        };
        writeln!(
            out,
            "{},{},{},{},{}",
            format_field(list_name, 24),
            format_field(counts.matched, 10),
            unmatched,
            format_field(counts.not_checked, 14),
            format_field(counts.routes, 9),
        )?;
    }

    let unmatched_total: usize = summary.values().map(|s| s.unmatched).sum();
    if unmatched_total > 0 {
        writeln!(
            out,
            "#{}# {} prefix-list entries have no matching route",
            "NOTE".on_red(),
            unmatched_total
        )?;
    }
    out.flush()?;
    Ok(())
}
