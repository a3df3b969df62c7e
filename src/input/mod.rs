//! Extraction of structured records from saved router command output.
//!
//! - [`prefix_list`] - `ip prefix-list` configuration lines
//! - [`ip_route`] - `show ip route` output

mod ip_route;
mod prefix_list;

pub use ip_route::{parse_ip_routes, read_ip_routes};
pub use prefix_list::{parse_prefix_lists, read_prefix_lists};
