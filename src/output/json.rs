//! JSON report of the reconciliation table.

use crate::error::AuditResult;
use crate::models::MatchResult;
use std::io::Write;

/// Write the rows as a pretty-printed JSON array.
pub fn write_report<W: Write>(rows: &[MatchResult], mut out: W) -> AuditResult<()> {
    log::info!("#Start write_report() json rows={}", rows.len());
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchOutcome, Protocol};

    #[test]
    fn test_json_report() {
        let rows = vec![
            MatchResult {
                entry: 0,
                list_name: "PL1".to_string(),
                prefix: "10.0.0.0/8".parse().unwrap(),
                sequence: 10,
                bound: Some("le 24".parse().unwrap()),
                outcome: MatchOutcome::Matched {
                    protocol: Protocol::Connected,
                    route: "10.1.1.0/24".parse().unwrap(),
                },
            },
            MatchResult {
                entry: 1,
                list_name: "PL1".to_string(),
                prefix: "0.0.0.0/0".parse().unwrap(),
                sequence: 20,
                bound: None,
                outcome: MatchOutcome::NotChecked,
            },
        ];
        let mut buf = Vec::new();
        write_report(&rows, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["prefix"], "10.0.0.0/8");
        assert_eq!(value[0]["bound"]["comparator"], "le");
        assert_eq!(value[0]["outcome"]["status"], "matched");
        assert_eq!(value[0]["outcome"]["route"], "10.1.1.0/24");
        assert_eq!(value[1]["outcome"]["status"], "not_checked");
        assert!(value[1]["bound"].is_null());

        let back: Vec<MatchResult> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, rows);
    }
}
