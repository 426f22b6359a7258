//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::app::InputSource;
use crate::checks::RecordKind;
use crate::config::constants::{MAX_WORKERS, WORKER_POOL_SIZE};
use crate::error_handling::ScanError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which record checks run for every domain.
///
/// Parsing is an exact, case-sensitive match on `spf`, `dkim`, `dmarc` or
/// `all`. The mode is resolved once, before any domain is dispatched, so an
/// invalid value rejects the whole run instead of failing inside a worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// SPF only
    Spf,
    /// DKIM selector probe only
    Dkim,
    /// DMARC only
    Dmarc,
    /// SPF, then DKIM, then DMARC
    All,
}

impl ScanMode {
    /// Record kinds checked by this mode, in reporting order.
    pub fn checks(self) -> &'static [RecordKind] {
        match self {
            ScanMode::Spf => &[RecordKind::Spf],
            ScanMode::Dkim => &[RecordKind::Dkim],
            ScanMode::Dmarc => &[RecordKind::Dmarc],
            ScanMode::All => &[RecordKind::Spf, RecordKind::Dkim, RecordKind::Dmarc],
        }
    }

    /// Name accepted by `--mode`.
    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::Spf => "spf",
            ScanMode::Dkim => "dkim",
            ScanMode::Dmarc => "dmarc",
            ScanMode::All => "all",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spf" => Ok(ScanMode::Spf),
            "dkim" => Ok(ScanMode::Dkim),
            "dmarc" => Ok(ScanMode::Dmarc),
            "all" => Ok(ScanMode::All),
            other => Err(ScanError::InvalidMode(other.to_string())),
        }
    }
}

/// clap value parser for `--mode`.
pub fn parse_scan_mode(s: &str) -> Result<ScanMode, ScanError> {
    s.parse()
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use mailauth_scan::{Config, InputSource, ScanMode};
///
/// let config = Config {
///     input: InputSource::Single("example.com".to_string()),
///     mode: ScanMode::Dmarc,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Where domains are read from
    pub input: InputSource,

    /// Record checks to run for each domain
    pub mode: ScanMode,

    /// Echo raw TXT records and resolver errors
    pub verbose: bool,

    /// Optional file with extra DKIM selectors (one per line)
    pub selector_file: Option<PathBuf>,

    /// Number of concurrent scan workers
    pub workers: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Colorize the result stream
    pub color: bool,

    /// Print the banner before scanning
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            mode: ScanMode::All,
            verbose: false,
            selector_file: None,
            workers: WORKER_POOL_SIZE,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            color: true,
            banner: true,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single domain, every check
/// mailauth_scan -u example.com
///
/// # A list of domains, DKIM only, with extra selectors
/// mailauth_scan -l domains.txt -m dkim -s selectors.txt
///
/// # Piped input
/// cat domains.txt | mailauth_scan -m spf -v
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "mailauth_scan",
    version,
    about = "Checks domains for SPF, DKIM and DMARC records."
)]
pub struct Opt {
    /// Single endpoint to check
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// File with one endpoint per line
    #[arg(short = 'l', long = "list", value_parser)]
    pub list: Option<PathBuf>,

    /// Mode: spf, dkim, dmarc, all
    #[arg(short = 'm', long = "mode", default_value = "all", value_parser = parse_scan_mode)]
    pub mode: ScanMode,

    /// Verbose output (raw TXT records and resolver errors)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// File containing extra DKIM selectors
    #[arg(short = 's', long = "selectors", value_parser)]
    pub selectors: Option<PathBuf>,

    /// Number of concurrent scan workers (1-1000)
    #[arg(
        long,
        default_value_t = WORKER_POOL_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_WORKERS as u64)
    )]
    pub workers: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Opt {
    /// Converts parsed CLI options into a library [`Config`].
    ///
    /// A single endpoint (`-u`) wins over a list file (`-l`); with neither,
    /// domains are read from stdin.
    pub fn into_config(self) -> Config {
        let input = match (self.url, self.list) {
            (Some(url), _) => InputSource::Single(url),
            (None, Some(path)) => InputSource::ListFile(path),
            (None, None) => InputSource::Stdin,
        };
        Config {
            input,
            mode: self.mode,
            verbose: self.verbose,
            selector_file: self.selectors,
            workers: self.workers,
            log_level: self.log_level,
            log_format: self.log_format,
            color: !self.no_color,
            banner: !self.no_banner,
        }
    }
}
