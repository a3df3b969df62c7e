//! Reconciliation result rows.

use super::{Bound, NetworkPrefix, Protocol};
use serde::{Deserialize, Serialize};

/// Rendered protocol/route text for an entry without a matching route.
pub const NO_MATCH: &str = "None";
/// Rendered protocol/route text for the default route, which is never matched.
pub const NOT_CHECKED: &str = "NC";

/// What a filter entry resolved to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Matched {
        protocol: Protocol,
        route: NetworkPrefix,
    },
    NoMatch,
    NotChecked,
}

impl MatchOutcome {
    /// Protocol column text: the route code, "None" or "NC".
    pub fn protocol_text(&self) -> String {
        match self {
            MatchOutcome::Matched { protocol, .. } => protocol.code().to_string(),
            MatchOutcome::NoMatch => NO_MATCH.to_string(),
            MatchOutcome::NotChecked => NOT_CHECKED.to_string(),
        }
    }

    /// Route column text: the exploded prefix, "None" or "NC".
    pub fn route_text(&self) -> String {
        match self {
            MatchOutcome::Matched { route, .. } => route.exploded(),
            MatchOutcome::NoMatch => NO_MATCH.to_string(),
            MatchOutcome::NotChecked => NOT_CHECKED.to_string(),
        }
    }
}

/// One row of the reconciliation table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Position of the filter entry in the sorted input.
    pub entry: usize,
    pub list_name: String,
    pub prefix: NetworkPrefix,
    pub sequence: u32,
    pub bound: Option<Bound>,
    pub outcome: MatchOutcome,
}

impl MatchResult {
    /// Operator column text, empty for exact-match entries.
    pub fn operator_text(&self) -> String {
        self.bound.map(|b| b.to_string()).unwrap_or_default()
    }
}
