//! Duplicate prefix-list entry detection.

use crate::models::FilterEntry;
use itertools::Itertools;

/// Return the `(list_name, sequence)` pairs configured more than once.
///
/// A router refuses two entries with the same sequence number in one list, so
/// duplicates usually mean two configuration dumps were concatenated.
pub fn check_for_duplicate_entries(entries: &[FilterEntry]) -> Vec<(String, u32)> {
    entries
        .iter()
        .map(|e| (e.list_name.clone(), e.sequence))
        .duplicates()
        .sorted()
        .collect()
}

/// Log duplicate entries as warnings.
pub fn log_duplicate_entries(duplicates: &[(String, u32)]) {
    if duplicates.is_empty() {
        log::info!("No duplicate prefix-list entries found.");
        return;
    }

    log::warn!(
        "Found {} prefix-list sequence number(s) configured more than once:",
        duplicates.len()
    );
    for (list_name, sequence) in duplicates {
        log::warn!("  {} seq {}", list_name, sequence);
    }
}
