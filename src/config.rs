// Configuration management for prefix-list-audit
// Supports CLI arguments, environment variables and a .env file

use crate::error::{AuditError, AuditResult};
use crate::models::Protocol;
use clap::{Parser, ValueEnum};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Report format written to the output file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Prefix-list audit - check configured prefix-lists against a saved routing table
#[derive(Parser, Debug, Clone)]
#[command(name = "prefix-list-audit")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// File with `ip prefix-list` configuration lines
    #[arg(long, env = "PLA_PREFIX_LISTS")]
    pub prefix_lists: PathBuf,

    /// File with saved `show ip route` output
    #[arg(long, env = "PLA_ROUTES")]
    pub routes: PathBuf,

    /// Report file, `-` for stdout [default: prefix_list_audit_<date>.<format>]
    #[arg(short, long, env = "PLA_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv", env = "PLA_FORMAT")]
    pub format: OutputFormat,

    /// Protocols to check (connected, static, eigrp, ospf, bgp)
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["connected", "static", "eigrp", "ospf", "bgp"],
        env = "PLA_PROTOCOLS"
    )]
    pub protocols: Vec<String>,

    /// log4rs configuration file
    #[arg(long, default_value = DEFAULT_LOG_CONFIG, env = "PLA_LOG_CONFIG")]
    pub log_config: PathBuf,

    /// Don't print the per-list summary
    #[arg(long, env = "PLA_NO_SUMMARY")]
    pub no_summary: bool,
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Stdout,
    File(PathBuf),
}

/// Validated configuration for one audit run.
#[derive(Debug, Clone)]
pub struct Config {
    pub prefix_lists: PathBuf,
    pub routes: PathBuf,
    pub output: ReportTarget,
    pub format: OutputFormat,
    pub protocols: BTreeSet<Protocol>,
    pub summary: bool,
}

impl Config {
    /// Validate parsed command-line arguments.
    pub fn from_args(args: &CliArgs) -> AuditResult<Self> {
        let protocols = parse_protocols(&args.protocols)?;

        let output = match &args.output {
            Some(path) if path.as_os_str() == "-" => ReportTarget::Stdout,
            Some(path) => ReportTarget::File(path.clone()),
            None => ReportTarget::File(default_output_path(args.format)),
        };

        Ok(Config {
            prefix_lists: args.prefix_lists.clone(),
            routes: args.routes.clone(),
            output,
            format: args.format,
            protocols,
            summary: !args.no_summary,
        })
    }
}

/// Parse protocol names, accepting only the recognized protocols.
pub fn parse_protocols<S: AsRef<str>>(names: &[S]) -> AuditResult<BTreeSet<Protocol>> {
    let protocols = names
        .iter()
        .map(|name| Protocol::from_name(name.as_ref()))
        .collect::<AuditResult<BTreeSet<Protocol>>>()?;
    if protocols.is_empty() {
        return Err(AuditError::UnrecognizedProtocol(
            "no protocol selected".to_string(),
        ));
    }
    Ok(protocols)
}

/// `prefix_list_audit_<YYYY-MM-DD>.<ext>` in the current directory.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    let now = chrono::Local::now();
    PathBuf::from(format!(
        "prefix_list_audit_{}.{}",
        now.format("%Y-%m-%d"),
        format.extension()
    ))
}

/// Initialise log4rs from `path`, or log to stderr at info when the file is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("Logging configured from: {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::debug!("Log config {} not found, using stderr", path.display());
    Ok(())
}
