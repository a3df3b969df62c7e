//! Domain models for prefix-list auditing.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkPrefix`] - IPv4 network in canonical CIDR form
//! - [`FilterEntry`] and [`Bound`] - configured prefix-list entries
//! - [`RouteEntry`] and [`Protocol`] - routing table entries
//! - [`MatchResult`] - one row of the reconciliation table

mod ipv4;
mod match_result;
mod prefix_list;
mod route;

// Re-export public types
pub use ipv4::{get_cidr_mask, NetworkPrefix, MAX_LENGTH};
pub use match_result::{MatchOutcome, MatchResult, NOT_CHECKED, NO_MATCH};
pub use prefix_list::{Action, Bound, Comparator, FilterEntry};
pub use route::{Protocol, RouteEntry};
