//! Filter-to-route matching.

use crate::models::{Bound, NetworkPrefix, Protocol, RouteEntry};
use std::collections::BTreeSet;

/// A route selected by a filter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub protocol: Protocol,
    pub prefix: NetworkPrefix,
}

/// Return every candidate route the filter selects, in candidate order.
///
/// Without a bound only an exactly equal prefix matches. With a bound the
/// filter must contain the route (never the other way round) and the route's
/// mask length must satisfy the bound. Routes whose protocol is not in
/// `allowed` are skipped.
pub fn match_routes(
    filter_prefix: &NetworkPrefix,
    candidates: &[RouteEntry],
    bound: Option<&Bound>,
    allowed: &BTreeSet<Protocol>,
) -> Vec<RouteMatch> {
    candidates
        .iter()
        .filter(|route| allowed.contains(&route.protocol))
        .filter(|route| match bound {
            None => route.prefix == *filter_prefix,
            Some(bound) => {
                filter_prefix.contains(&route.prefix) && bound.accepts(route.prefix.prefix_len())
            }
        })
        .map(|route| RouteMatch {
            protocol: route.protocol.clone(),
            prefix: route.prefix,
        })
        .collect()
}
