//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Error types for collecting domains and selectors.
///
/// A domain-list failure aborts the run; a selector-file failure is reported
/// and the built-in selectors are used instead.
#[derive(Error, Debug)]
pub enum InputError {
    /// No `-u`, no `-l`, and nothing piped on stdin.
    #[error("Please provide an endpoint with -u, a list with -l, or pipe domains into stdin.")]
    NoInput,

    /// The `-u` endpoint has no host left after sanitization.
    #[error("Endpoint '{0}' does not contain a domain name")]
    EmptyEndpoint(String),

    /// The domain list file could not be opened or read.
    #[error("Error opening file {}: {source}", path.display())]
    ListFile {
        /// Path given with `-l`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading piped input failed.
    #[error("Error reading stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// The selector file could not be opened or read.
    #[error("Error opening selector file {}: {source}", path.display())]
    SelectorFile {
        /// Path given with `-s`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Usage errors, detected before any domain is dispatched.
#[derive(Error, Debug)]
pub enum ScanError {
    /// `--mode` was not one of the four accepted names.
    #[error("Invalid mode '{0}'. Please use: spf, dkim, dmarc, all")]
    InvalidMode(String),

    /// `--workers 0`
    #[error("Worker pool size must be at least 1")]
    ZeroWorkers,

    /// Pool size above `MAX_WORKERS`.
    #[error("Worker pool size {0} exceeds the maximum of {max}", max = crate::config::MAX_WORKERS)]
    TooManyWorkers(usize),
}
