//! Canonical ordering of prefix-bearing records.
//!
//! Records are ordered by a caller supplied group key, then by numeric network
//! address. The sort is stable, so records sharing both keys (for example the
//! same network with a different mask length) keep their input order.

use crate::models::{FilterEntry, NetworkPrefix, RouteEntry};

/// Anything that carries a [`NetworkPrefix`].
pub trait Prefixed {
    fn prefix(&self) -> &NetworkPrefix;
}

impl Prefixed for FilterEntry {
    fn prefix(&self) -> &NetworkPrefix {
        &self.prefix
    }
}

impl Prefixed for RouteEntry {
    fn prefix(&self) -> &NetworkPrefix {
        &self.prefix
    }
}

/// Stable sort by `(group_key(record), network_value(record.prefix))`.
pub fn sort_by_group<T, K, F>(mut records: Vec<T>, group_key: F) -> Vec<T>
where
    T: Prefixed,
    K: Ord,
    F: Fn(&T) -> K,
{
    records.sort_by_key(|r| (group_key(r), r.prefix().network_value()));
    records
}

/// Sort prefix-list entries by list name then network.
pub fn sort_filter_entries(entries: Vec<FilterEntry>) -> Vec<FilterEntry> {
    sort_by_group(entries, |e| e.list_name.clone())
}

/// Sort routes by route table code then network.
pub fn sort_route_entries(routes: Vec<RouteEntry>) -> Vec<RouteEntry> {
    sort_by_group(routes, |r| r.protocol.code().to_string())
}
