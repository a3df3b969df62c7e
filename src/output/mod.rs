//! Output formatting for reconciliation results.
//!
//! This module handles rendering the result table:
//! - [`csv`] - CSV report with one column per protocol
//! - [`json`] - JSON report
//! - [`terminal`] - Terminal summary with colors

pub mod csv;
pub mod json;
mod terminal;

pub use csv::report_column;
pub use terminal::{format_field, summarize, write_summary, ListSummary};
