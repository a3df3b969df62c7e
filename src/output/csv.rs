//! CSV report of the reconciliation table.
//!
//! One line per result row. The matched route is written in the column of the
//! protocol it was learned by, so a spreadsheet shows at a glance which
//! prefix-list entries are backed by connected, static, EIGRP, OSPF or BGP routes.

use crate::error::{AuditError, AuditResult};
use crate::models::{MatchOutcome, MatchResult, Protocol};
use std::io::Write;

/// Report header. Protocol columns start at [`FIRST_PROTOCOL_COLUMN`].
pub const HEADER: [&str; 9] = [
    "PL_name",
    "IP_prefix",
    "operator",
    "seq",
    "connected",
    "static",
    "EIGRP",
    "OSPF",
    "BGP",
];

pub const FIRST_PROTOCOL_COLUMN: usize = 4;

/// Column index a protocol's routes are written to.
pub fn report_column(protocol: &Protocol) -> AuditResult<usize> {
    match protocol {
        Protocol::Connected => Ok(4),
        Protocol::Static => Ok(5),
        Protocol::Eigrp => Ok(6),
        Protocol::Ospf => Ok(7),
        Protocol::Bgp => Ok(8),
        Protocol::Other(code) => Err(AuditError::UnrecognizedProtocol(code.clone())),
    }
}

/// Write the header and every row as CSV.
///
/// All columns are checked before anything is written, so an unrecognized
/// protocol leaves the writer untouched.
pub fn write_report<W: Write>(rows: &[MatchResult], mut out: W) -> AuditResult<()> {
    log::info!("#Start write_report() csv rows={}", rows.len());

    let lines = rows
        .iter()
        .map(csv_line)
        .collect::<AuditResult<Vec<String>>>()?;

    writeln!(out, "{}", HEADER.join(","))?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn csv_line(row: &MatchResult) -> AuditResult<String> {
    let mut fields = vec![String::new(); HEADER.len()];
    fields[0] = escape_csv_field(&row.list_name);
    fields[1] = row.prefix.exploded();
    fields[2] = escape_csv_field(&row.operator_text());
    fields[3] = row.sequence.to_string();
    if let MatchOutcome::Matched { protocol, route } = &row.outcome {
        fields[report_column(protocol)?] = route.exploded();
    }
    Ok(fields.join(","))
}

fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // If the string contains a comma or double quote, enclose it in double quotes
        // and escape any double quotes within the field.
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
