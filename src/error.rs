//! Error types for prefix-list auditing.

use thiserror::Error;

/// Main error type for the audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unrecognized operator: {0}")]
    UnrecognizedOperator(String),

    #[error("Unrecognized action: {0}")]
    UnrecognizedAction(String),

    #[error("Invalid sequence number: {0}")]
    InvalidSequence(String),

    #[error("Unrecognized protocol: {0}")]
    UnrecognizedProtocol(String),

    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: Box<AuditError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AuditError
pub type AuditResult<T> = Result<T, AuditError>;

impl AuditError {
    /// Attach a 1-based input line number to a record-level error.
    pub fn at_line(self, line: usize) -> Self {
        AuditError::Parse {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_message() {
        let err = AuditError::InvalidAddress("10.0.0/8".to_string()).at_line(7);
        assert_eq!(err.to_string(), "Line 7: Invalid address: 10.0.0/8");
        assert!(matches!(
            err,
            AuditError::Parse { line: 7, ref source } if matches!(**source, AuditError::InvalidAddress(_))
        ));
    }
}
