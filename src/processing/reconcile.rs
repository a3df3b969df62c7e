//! Reconciliation of prefix-list entries against the routing table.

use super::matcher::match_routes;
use crate::models::{FilterEntry, MatchOutcome, MatchResult, Protocol, RouteEntry};
use std::collections::BTreeSet;

/// Default set of protocols checked: connected, static, EIGRP, OSPF and BGP.
pub fn default_protocols() -> BTreeSet<Protocol> {
    Protocol::RECOGNIZED.into_iter().collect()
}

/// Produce the result rows for every filter entry, in input order.
///
/// Each entry yields at least one row. An entry for `0.0.0.0/0` yields a single
/// not-checked row, since it would otherwise match every route in the table.
pub fn reconcile(
    filters: &[FilterEntry],
    routes: &[RouteEntry],
    allowed: &BTreeSet<Protocol>,
) -> Vec<MatchResult> {
    log::info!(
        "#Start reconcile() {} prefix-list entries against {} routes, protocols={:?}",
        filters.len(),
        routes.len(),
        allowed.iter().map(Protocol::code).collect::<Vec<&str>>()
    );

    let results: Vec<MatchResult> = filters
        .iter()
        .enumerate()
        .flat_map(|(entry, filter)| reconcile_entry(entry, filter, routes, allowed))
        .collect();

    log::info!("# Got {} result rows", results.len());
    results
}

/// [`reconcile`] with the [`default_protocols`] set.
pub fn reconcile_default(filters: &[FilterEntry], routes: &[RouteEntry]) -> Vec<MatchResult> {
    reconcile(filters, routes, &default_protocols())
}

fn reconcile_entry(
    entry: usize,
    filter: &FilterEntry,
    routes: &[RouteEntry],
    allowed: &BTreeSet<Protocol>,
) -> Vec<MatchResult> {
    let row = |outcome: MatchOutcome| MatchResult {
        entry,
        list_name: filter.list_name.clone(),
        prefix: filter.prefix,
        sequence: filter.sequence,
        bound: filter.bound,
        outcome,
    };

    if filter.prefix.is_default_route() {
        log::debug!(
            "{} seq {} is the default route, not checked",
            filter.list_name,
            filter.sequence
        );
        return vec![row(MatchOutcome::NotChecked)];
    }

    let matches = match_routes(&filter.prefix, routes, filter.bound.as_ref(), allowed);
    if matches.is_empty() {
        log::debug!(
            "{} seq {} {} has no matching route",
            filter.list_name,
            filter.sequence,
            filter.prefix
        );
        return vec![row(MatchOutcome::NoMatch)];
    }

    matches
        .into_iter()
        .map(|m| {
            row(MatchOutcome::Matched {
                protocol: m.protocol,
                route: m.prefix,
            })
        })
        .collect()
}
