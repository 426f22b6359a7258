//! Input collection and run summaries.
//!
//! This module provides the glue around the scan engine: turning endpoints
//! into domains, loading the DKIM selector set, and logging the final
//! statistics.

pub mod input;
pub mod selectors;
pub mod statistics;

// Re-export public API
pub use input::{collect_domains, sanitize_endpoint, Domain, InputSource};
pub use selectors::{load_selectors, SelectorSet};
pub use statistics::print_scan_statistics;
