//! Extraction of `ip prefix-list` entries from router configuration text.

use crate::error::{AuditError, AuditResult};
use crate::models::FilterEntry;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref PREFIX_LIST_RE: Regex = Regex::new(
        r"^\s*ip\s+prefix-list\s+(?P<prefix_list>\S+)\s+seq\s+(?P<seq_number>\d+)\s+(?P<action>\S+)\s+(?P<prefix>\d+\.\d+\.\d+\.\d+/\d+)(?:\s+(?P<operator>[a-z]+\s+\d+))?(?:\s+(?P<extra>[a-z]+\s+\d+))?"
    )
    .expect("Invalid Regex?");
}

/// Parse every `ip prefix-list ... seq ...` line of `text`.
///
/// Other lines are skipped. When an entry carries both `ge` and `le` only the
/// first operator is kept.
pub fn parse_prefix_lists(text: &str) -> AuditResult<Vec<FilterEntry>> {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for (i, line) in text.lines().enumerate() {
        let Some(caps) = PREFIX_LIST_RE.captures(line) else {
            skipped += 1;
            log::trace!("skip line {}: {:?}", i + 1, line);
            continue;
        };

        let sequence: u32 = caps["seq_number"].parse().map_err(|_| {
            AuditError::InvalidSequence(caps["seq_number"].to_string()).at_line(i + 1)
        })?;
        if let Some(extra) = caps.name("extra") {
            log::warn!(
                "line {}: {} seq {} has a second operator '{}', only '{}' is checked",
                i + 1,
                &caps["prefix_list"],
                sequence,
                extra.as_str(),
                caps.name("operator").map_or("", |m| m.as_str())
            );
        }

        let entry = FilterEntry::from_fields(
            &caps["prefix_list"],
            &caps["prefix"],
            sequence,
            &caps["action"],
            caps.name("operator").map(|m| m.as_str()),
        )
        .map_err(|e| e.at_line(i + 1))?;
        entries.push(entry);
    }

    log::debug!(
        "parsed {} prefix-list entries, skipped {} lines",
        entries.len(),
        skipped
    );
    Ok(entries)
}

/// Read and parse a prefix-list configuration file.
pub fn read_prefix_lists(path: &Path) -> AuditResult<Vec<FilterEntry>> {
    log::info!("Reading prefix-lists from: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_prefix_lists(&text)
}
