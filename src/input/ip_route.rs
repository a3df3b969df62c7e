//! Extraction of routes from `show ip route` output.

use crate::error::AuditResult;
use crate::models::RouteEntry;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    // <code> [<subcode>] <prefix> [ad/metric] via <gw>[, <age>, <if>]
    // <code> <prefix> is directly connected, <if>
    static ref IP_ROUTE_RE: Regex = Regex::new(concat!(
        r"^(?P<method>\S+)\s+(?:\S+\s+)?(?P<prefix>\d+\.\d+\.\d+\.\d+/\d+)\s+",
        r"(?:\[\d+/\d+\]\s+via\s+(?P<gateway>\d+\.\d+\.\d+\.\d+)(?:,\s*[^,\s]+,\s*(?P<next_hop>[^,\s]+))?)?",
        r"(?:is\s+directly\s+connected,\s*(?P<next_hop_connected>\S+))?"
    ))
    .expect("Invalid Regex?");
}

/// Parse every route line of `show ip route` output.
///
/// Legend, gateway-of-last-resort and "is variably subnetted" lines are
/// skipped, as are indented ECMP continuation lines.
pub fn parse_ip_routes(text: &str) -> AuditResult<Vec<RouteEntry>> {
    let mut routes = Vec::new();
    let mut skipped = 0;

    for (i, line) in text.lines().enumerate() {
        let Some(caps) = IP_ROUTE_RE.captures(line) else {
            skipped += 1;
            log::trace!("skip line {}: {:?}", i + 1, line);
            continue;
        };

        let route = RouteEntry::from_fields(
            &caps["method"],
            &caps["prefix"],
            caps.name("gateway").map(|m| m.as_str()),
            caps.name("next_hop").map(|m| m.as_str()),
            caps.name("next_hop_connected").map(|m| m.as_str()),
        )
        .map_err(|e| e.at_line(i + 1))?;
        log::trace!(
            "route {} {} via {:?}",
            route.protocol,
            route.prefix,
            route.gateway
        );
        routes.push(route);
    }

    log::debug!("parsed {} routes, skipped {} lines", routes.len(), skipped);
    Ok(routes)
}

/// Read and parse a saved `show ip route` output file.
pub fn read_ip_routes(path: &Path) -> AuditResult<Vec<RouteEntry>> {
    log::info!("Reading routing table from: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_ip_routes(&text)
}
