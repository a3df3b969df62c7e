//! Integration tests for prefix-list-audit
//!
//! These tests verify the complete workflow from reading saved router output to the report.

use prefix_list_audit::{
    config::{Config, OutputFormat, ReportTarget},
    error::AuditError,
    get_sorted_filter_entries, get_sorted_routes,
    models::{MatchResult, Protocol},
    processing::{check_for_duplicate_entries, default_protocols, reconcile, reconcile_default},
    run, write_outputs, write_report,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const PREFIX_LISTS: &str = "src/tests/test_data/prefix_lists.txt";
const SHOW_IP_ROUTE: &str = "src/tests/test_data/show_ip_route.txt";

fn table(results: &[MatchResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| {
            format!(
                "{} {} {} [{}] {} {}",
                r.list_name,
                r.prefix,
                r.sequence,
                r.operator_text(),
                r.outcome.protocol_text(),
                r.outcome.route_text()
            )
        })
        .collect()
}

#[test]
fn test_full_workflow() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS))
        .expect("Failed to read prefix-lists");
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).expect("Failed to read routes");

    assert_eq!(filters.len(), 9, "Expected 9 prefix-list entries");
    assert_eq!(routes.len(), 10, "Expected 10 routes with a prefix length");
    assert!(check_for_duplicate_entries(&filters).is_empty());

    let results = reconcile_default(&filters, &routes);
    assert_eq!(
        table(&results),
        vec![
            "CUSTOMER_IN 0.0.0.0/0 20 [le 32] NC NC",
            "CUSTOMER_IN 10.1.0.0/16 5 [le 24] C 10.1.1.0/24",
            "CUSTOMER_IN 10.1.0.0/16 5 [le 24] D 10.1.2.0/24",
            "CUSTOMER_IN 10.1.0.0/16 5 [le 24] S 10.1.0.0/16",
            "CUSTOMER_IN 172.16.0.0/12 10 [ge 24] C 172.16.5.0/24",
            "CUSTOMER_IN 192.168.99.0/24 15 [] None None",
            "DEFAULT_ONLY 0.0.0.0/0 5 [] NC NC",
            "TRANSIT_OUT 9.9.9.0/24 5 [] None None",
            "TRANSIT_OUT 10.0.0.0/8 30 [ge 25] O 10.1.3.0/25",
            "TRANSIT_OUT 10.0.0.0/8 30 [ge 25] O 10.30.4.128/25",
            "TRANSIT_OUT 10.1.1.0/24 20 [] C 10.1.1.0/24",
            "TRANSIT_OUT 10.20.0.0/16 10 [] B 10.20.0.0/16",
        ]
    );
}

#[test]
fn test_local_routes_never_match() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let results = reconcile(&filters, &routes, &default_protocols());
    assert!(results
        .iter()
        .all(|r| !r.outcome.route_text().ends_with("/32")));
}

#[test]
fn test_bgp_only() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let bgp: BTreeSet<Protocol> = [Protocol::Bgp].into_iter().collect();
    let results = reconcile(&filters, &routes, &bgp);

    assert_eq!(results.len(), filters.len(), "one row per entry");
    let matched: Vec<&MatchResult> = results
        .iter()
        .filter(|r| r.outcome.protocol_text() == "B")
        .collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].prefix.to_string(), "10.20.0.0/16");
}

#[test]
fn test_csv_report() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let results = reconcile_default(&filters, &routes);

    let mut buf = Vec::new();
    write_report(&results, OutputFormat::Csv, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), results.len() + 1);
    assert_eq!(lines[2], "CUSTOMER_IN,10.1.0.0/16,le 24,5,10.1.1.0/24,,,,");
    assert_eq!(lines[3], "CUSTOMER_IN,10.1.0.0/16,le 24,5,,,10.1.2.0/24,,");
    assert_eq!(lines[4], "CUSTOMER_IN,10.1.0.0/16,le 24,5,,10.1.0.0/16,,,");
    assert_eq!(lines[12], "TRANSIT_OUT,10.20.0.0/16,,10,,,,,10.20.0.0/16");
}

#[test]
fn test_run_writes_json_report() {
    let output: PathBuf = std::env::temp_dir().join(format!(
        "prefix_list_audit_test_{}.json",
        std::process::id()
    ));
    let config = Config {
        prefix_lists: PathBuf::from(PREFIX_LISTS),
        routes: PathBuf::from(SHOW_IP_ROUTE),
        output: ReportTarget::File(output.clone()),
        format: OutputFormat::Json,
        protocols: default_protocols(),
        summary: false,
    };

    let results = run(&config).expect("run failed");
    let written = std::fs::read_to_string(&output).expect("report not written");
    std::fs::remove_file(&output).ok();

    let back: Vec<MatchResult> = serde_json::from_str(&written).expect("invalid JSON report");
    assert_eq!(back, results);
    assert_eq!(back.len(), 12);
}

#[test]
fn test_run_missing_input() {
    let config = Config {
        prefix_lists: PathBuf::from("src/tests/test_data/does_not_exist.txt"),
        routes: PathBuf::from(SHOW_IP_ROUTE),
        output: ReportTarget::Stdout,
        format: OutputFormat::Csv,
        protocols: default_protocols(),
        summary: false,
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, AuditError::Io(_)));
}

fn stdout_config(format: OutputFormat) -> Config {
    Config {
        prefix_lists: PathBuf::from(PREFIX_LISTS),
        routes: PathBuf::from(SHOW_IP_ROUTE),
        output: ReportTarget::Stdout,
        format,
        protocols: default_protocols(),
        summary: true,
    }
}

#[test]
fn test_summary_kept_out_of_csv_report() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let results = reconcile_default(&filters, &routes);

    let mut report = Vec::new();
    let mut summary = Vec::new();
    write_outputs(&results, &stdout_config(OutputFormat::Csv), &mut report, &mut summary)
        .unwrap();

    let report = String::from_utf8(report).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), results.len() + 1, "header plus one line per row");
    assert!(lines[0].starts_with("PL_name,IP_prefix,"));
    assert_eq!(lines[12], "TRANSIT_OUT,10.20.0.0/16,,10,,,,,10.20.0.0/16");
    assert!(!report.contains("prefix-list entries have no matching route"));

    let summary = String::from_utf8(summary).unwrap();
    assert!(summary.contains("\"CUSTOMER_IN\""));
    assert!(summary.contains("2 prefix-list entries have no matching route"));
}

#[test]
fn test_summary_kept_out_of_json_report() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let results = reconcile_default(&filters, &routes);

    let mut report = Vec::new();
    let mut summary = Vec::new();
    write_outputs(&results, &stdout_config(OutputFormat::Json), &mut report, &mut summary)
        .unwrap();

    let back: Vec<MatchResult> = serde_json::from_slice(&report).expect("invalid JSON report");
    assert_eq!(back, results);
    assert!(!summary.is_empty());
}

#[test]
fn test_no_summary_writes_nothing_else() {
    let filters = get_sorted_filter_entries(Path::new(PREFIX_LISTS)).unwrap();
    let routes = get_sorted_routes(Path::new(SHOW_IP_ROUTE)).unwrap();
    let results = reconcile_default(&filters, &routes);
    let config = Config {
        summary: false,
        ..stdout_config(OutputFormat::Csv)
    };

    let mut report = Vec::new();
    let mut summary = Vec::new();
    write_outputs(&results, &config, &mut report, &mut summary).unwrap();
    assert!(summary.is_empty());
    assert_eq!(
        String::from_utf8(report).unwrap().lines().count(),
        results.len() + 1
    );
}
