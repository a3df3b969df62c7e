//! Routing table entry model.

use super::NetworkPrefix;
use crate::error::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// How a route was learned.
///
/// Route table codes outside the five audited protocols are kept as `Other`
/// so they can be sorted and logged, but they never match a filter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    Connected,
    Static,
    Eigrp,
    Ospf,
    Bgp,
    Other(String),
}

impl Protocol {
    /// The five protocols an audit checks by default.
    pub const RECOGNIZED: [Protocol; 5] = [
        Protocol::Connected,
        Protocol::Static,
        Protocol::Eigrp,
        Protocol::Ospf,
        Protocol::Bgp,
    ];

    /// Map a `show ip route` code letter to a protocol.
    pub fn from_code(code: &str) -> Protocol {
        match code {
            "C" => Protocol::Connected,
            // "S*" marks the candidate default
            "S" | "S*" => Protocol::Static,
            "D" => Protocol::Eigrp,
            "O" => Protocol::Ospf,
            "B" => Protocol::Bgp,
            other => Protocol::Other(other.to_string()),
        }
    }

    /// Route table code letter for this protocol.
    pub fn code(&self) -> &str {
        match self {
            Protocol::Connected => "C",
            Protocol::Static => "S",
            Protocol::Eigrp => "D",
            Protocol::Ospf => "O",
            Protocol::Bgp => "B",
            Protocol::Other(code) => code,
        }
    }

    /// Parse a configuration name (`connected`, `static`, `eigrp`, `ospf`, `bgp`).
    ///
    /// Only recognized protocols can be named; anything else is an error.
    pub fn from_name(name: &str) -> AuditResult<Protocol> {
        match name.trim().to_lowercase().as_str() {
            "connected" => Ok(Protocol::Connected),
            "static" => Ok(Protocol::Static),
            "eigrp" => Ok(Protocol::Eigrp),
            "ospf" => Ok(Protocol::Ospf),
            "bgp" => Ok(Protocol::Bgp),
            _ => Err(AuditError::UnrecognizedProtocol(name.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One line of the routing table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub protocol: Protocol,
    pub prefix: NetworkPrefix,
    /// Absent for connected routes.
    pub gateway: Option<Ipv4Addr>,
    pub next_hop_interface: Option<String>,
}

impl RouteEntry {
    /// Build a route from the text fields extracted from `show ip route`.
    ///
    /// Connected routes take their interface from the directly-connected field
    /// and never carry a gateway; other routes use the via clause.
    pub fn from_fields(
        code: &str,
        prefix: &str,
        gateway: Option<&str>,
        next_hop: Option<&str>,
        connected_interface: Option<&str>,
    ) -> AuditResult<RouteEntry> {
        let protocol = Protocol::from_code(code);
        let prefix = prefix.parse()?;
        let (gateway, next_hop_interface) = if protocol == Protocol::Connected {
            (None, connected_interface)
        } else {
            let gateway = gateway
                .map(|gw| {
                    gw.parse::<Ipv4Addr>()
                        .map_err(|_| AuditError::InvalidAddress(format!("invalid gateway {gw}")))
                })
                .transpose()?;
            (gateway, next_hop.or(connected_interface))
        };
        Ok(RouteEntry {
            protocol,
            prefix,
            gateway,
            next_hop_interface: next_hop_interface.map(str::to_string),
        })
    }
}
