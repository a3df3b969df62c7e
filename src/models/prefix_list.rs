//! Prefix-list filter entry model.

use super::NetworkPrefix;
use crate::error::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configured action of a prefix-list entry. Recorded only, never evaluated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Permit,
    Deny,
}

impl FromStr for Action {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permit" => Ok(Action::Permit),
            "deny" => Ok(Action::Deny),
            other => Err(AuditError::UnrecognizedAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Permit => write!(f, "permit"),
            Action::Deny => write!(f, "deny"),
        }
    }
}

/// Mask-length comparator of a bound.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    /// Apply the comparator as `route_len <op> bound_len`.
    pub fn accepts(&self, route_len: u8, bound_len: u8) -> bool {
        match self {
            Comparator::Lt => route_len < bound_len,
            Comparator::Le => route_len <= bound_len,
            Comparator::Gt => route_len > bound_len,
            Comparator::Ge => route_len >= bound_len,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Comparator::Lt => "lt",
            Comparator::Le => "le",
            Comparator::Gt => "gt",
            Comparator::Ge => "ge",
        }
    }
}

impl FromStr for Comparator {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lt" => Ok(Comparator::Lt),
            "le" => Ok(Comparator::Le),
            "gt" => Ok(Comparator::Gt),
            "ge" => Ok(Comparator::Ge),
            other => Err(AuditError::UnrecognizedOperator(other.to_string())),
        }
    }
}

/// Mask-length bound such as `le 24`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub comparator: Comparator,
    pub length: u8,
}

impl Bound {
    pub fn accepts(&self, route_len: u8) -> bool {
        self.comparator.accepts(route_len, self.length)
    }
}

impl FromStr for Bound {
    type Err = AuditError;

    /// Parse `"<lt|le|gt|ge> <0-32>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || AuditError::UnrecognizedOperator(s.trim().to_string());
        let mut parts = s.split_whitespace();
        let (Some(op), Some(len), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unrecognized());
        };
        let comparator: Comparator = op.parse().map_err(|_| unrecognized())?;
        let length: u8 = len.parse().map_err(|_| unrecognized())?;
        if length > super::MAX_LENGTH {
            return Err(unrecognized());
        }
        Ok(Bound { comparator, length })
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.comparator.token(), self.length)
    }
}

/// One `ip prefix-list` line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub list_name: String,
    pub prefix: NetworkPrefix,
    pub sequence: u32,
    pub action: Action,
    /// None means exact match only.
    pub bound: Option<Bound>,
}

impl FilterEntry {
    /// Build an entry from the text fields extracted from configuration.
    pub fn from_fields(
        list_name: &str,
        prefix: &str,
        sequence: u32,
        action: &str,
        operator: Option<&str>,
    ) -> AuditResult<FilterEntry> {
        Ok(FilterEntry {
            list_name: list_name.to_string(),
            prefix: prefix.parse()?,
            sequence,
            action: action.parse()?,
            bound: operator.map(str::parse::<Bound>).transpose()?,
        })
    }
}
