//! SPF, DKIM and DMARC record checkers.
//!
//! Each checker produces exactly one [`CheckOutcome`] per domain. Resolver
//! errors never fail a check: they become `NotFound`, with the error text kept
//! as a verbose detail.

mod dkim;
mod dmarc;
mod spf;
mod txt;
mod types;

use std::sync::Arc;

use crate::app::{Domain, SelectorSet};
use crate::dns::TxtResolver;

// Re-export public API
pub use dkim::probe_dkim;
pub use dmarc::check_dmarc;
pub use spf::check_spf;
pub use types::{CheckOutcome, CheckStatus, Detail, RecordKind};

/// Runs the checker for `kind` against `domain`.
pub async fn run_check(
    kind: RecordKind,
    resolver: &Arc<dyn TxtResolver>,
    domain: &Domain,
    selectors: &SelectorSet,
    verbose: bool,
) -> CheckOutcome {
    match kind {
        RecordKind::Spf => check_spf(resolver.as_ref(), domain, verbose).await,
        RecordKind::Dkim => probe_dkim(Arc::clone(resolver), domain, selectors, verbose).await,
        RecordKind::Dmarc => check_dmarc(resolver.as_ref(), domain, verbose).await,
    }
}
