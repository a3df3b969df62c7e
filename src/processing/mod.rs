//! Prefix-list reconciliation logic.
//!
//! This module contains the matching and ordering engine:
//! - [`sort`] - Canonical ordering of prefix-list entries and routes
//! - [`matcher`] - Matching one prefix-list entry against candidate routes
//! - [`reconcile`] - Building the result table for all entries
//! - [`dedup`] - Duplicate entry detection

mod dedup;
mod matcher;
mod reconcile;
mod sort;

// Re-export public functions
pub use dedup::{check_for_duplicate_entries, log_duplicate_entries};
pub use matcher::{match_routes, RouteMatch};
pub use reconcile::{default_protocols, reconcile, reconcile_default};
pub use sort::{sort_by_group, sort_filter_entries, sort_route_entries, Prefixed};
