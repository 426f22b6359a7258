//! mailauth_scan library: concurrent SPF / DKIM / DMARC scanning
//!
//! This library checks a batch of domains for the three email-authentication
//! DNS records. Domains are spread over a fixed pool of workers; each DKIM
//! check probes every selector concurrently and reports a single verdict.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mailauth_scan::{dispatch_scan, Domain, FixtureResolver, ScanMode, ScanSettings,
//!     SelectorSet, Style, TxtResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let resolver: Arc<dyn TxtResolver> = Arc::new(
//!     FixtureResolver::new().with_txt("example.com", "v=spf1 -all"),
//! );
//! let settings = ScanSettings {
//!     mode: ScanMode::Spf,
//!     verbose: false,
//!     workers: 4,
//!     style: Style::plain(),
//! };
//! let domains = vec![Domain::parse("example.com").unwrap()];
//! let (report, out) =
//!     dispatch_scan(domains, SelectorSet::defaults(), resolver, &settings, Vec::new()).await?;
//! print!("{}", String::from_utf8_lossy(&out));
//! println!("{} domain(s) scanned", report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
mod checks;
pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod report;
mod run;

// Re-export public API
pub use app::{collect_domains, load_selectors, sanitize_endpoint, Domain, InputSource, SelectorSet};
pub use checks::{check_dmarc, check_spf, probe_dkim, CheckOutcome, CheckStatus, Detail, RecordKind};
pub use config::{Config, LogFormat, LogLevel, Opt, ScanMode};
pub use dns::{FixtureResolver, HickoryTxtResolver, LookupError, TxtResolver};
pub use error_handling::{InitializationError, InputError, ScanError};
pub use report::{banner, DomainReport, Style};
pub use run::{
    dispatch_scan, run_scan, scan_domain, KindSummary, ScanJob, ScanReport, ScanSettings,
    HANDOFF_CAPACITY,
};
