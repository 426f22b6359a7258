//! DNS TXT resolution for the record checkers.
//!
//! This module provides:
//! - The [`TxtResolver`] capability the checkers are written against
//! - A `hickory-resolver` backed implementation for real scans
//! - An in-memory [`FixtureResolver`] for tests and dry runs
//! - Query-name builders and version-tag matching
//!
//! Every lookup failure is reported as a [`LookupError`]; the checkers fold
//! both variants into a "record not found" outcome.

mod extract;
mod fixture;
mod records;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public API
pub use extract::{dkim_name, dmarc_name, has_version_tag};
pub use fixture::FixtureResolver;
pub use records::HickoryTxtResolver;

/// Looks up TXT records for a query name.
#[async_trait]
pub trait TxtResolver: Send + Sync {
    /// Returns every TXT record published at `name`, multi-string payloads joined.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// Why a TXT lookup produced no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// NXDOMAIN or an empty answer.
    #[error("no TXT records found for {name}")]
    NoRecords {
        /// Query name
        name: String,
    },

    /// Timeouts, network failures, malformed responses.
    #[error("TXT lookup for {name} failed: {message}")]
    Failed {
        /// Query name
        name: String,
        /// Resolver error text
        message: String,
    },
}

impl LookupError {
    /// True for resolver failures, false when the name simply has no records.
    pub fn is_failure(&self) -> bool {
        matches!(self, LookupError::Failed { .. })
    }
}

#[cfg(test)]
mod tests;
