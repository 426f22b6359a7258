//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including pool sizing, DNS timeouts and the record tags the checkers match.

/// Number of long-lived scan workers pulling domains from the handoff channel.
pub const WORKER_POOL_SIZE: usize = 10;
/// Largest accepted `--workers` value.
pub const MAX_WORKERS: usize = 1000;
/// Finished domain reports that may queue up ahead of the reporter.
pub const REPORT_BUFFER: usize = 64;

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Attempts per DNS query before the resolver gives up
pub const DNS_ATTEMPTS: usize = 2;

/// Built-in DKIM selectors, probed for every domain in this order.
///
/// Extra selectors loaded from a file are appended after these.
pub const DEFAULT_SELECTORS: &[&str] = &[
    "default",
    "selector1",
    "selector2",
    "mail",
    "smtp",
    "google",
    "amazonses",
    "mandrill",
    "sendgrid",
    "mailjet",
];

// Record version tags (matched case-insensitively as a prefix)
/// SPF version tag
pub const SPF_VERSION_TAG: &str = "v=spf1";
/// DMARC version tag
pub const DMARC_VERSION_TAG: &str = "v=DMARC1";
/// DKIM version tag
pub const DKIM_VERSION_TAG: &str = "v=DKIM1";

// Query name labels
/// Label prepended to the domain for DMARC queries
pub const DMARC_LABEL: &str = "_dmarc";
/// Label between the selector and the domain for DKIM queries
pub const DKIM_LABEL: &str = "_domainkey";

/// Printed after every domain once all of its checks have completed.
pub const DOMAIN_SEPARATOR: &str = "-------------------------------";
