//! DKIM selector prober.
//!
//! Every selector is looked up concurrently at `<selector>._domainkey.<domain>`.
//! The first task to match claims the per-domain winner slot under a mutex, so
//! at most one match is reported even when several selectors resolve. All
//! lookups run to completion before the verdict is produced; outstanding
//! lookups are not cancelled once a match is found.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};
use tokio::task::JoinSet;

use crate::app::{Domain, SelectorSet};
use crate::dns::{dkim_name, has_version_tag, TxtResolver};

use super::types::{CheckOutcome, Detail, RecordKind};

/// The selector that won the race and the record it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DkimMatch {
    selector: String,
    record: String,
}

/// Per-domain winner slot. Unset until the first matching selector claims it.
#[derive(Default)]
struct WinnerSlot(Mutex<Option<DkimMatch>>);

impl WinnerSlot {
    fn lock(&self) -> MutexGuard<'_, Option<DkimMatch>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claims the slot for `selector`. Returns false if another selector won.
    fn claim(&self, domain: &str, selector: &str, record: &str) -> bool {
        let mut slot = self.lock();
        if slot.is_some() {
            return false;
        }
        debug!("DKIM record found for {domain} with selector '{selector}'");
        *slot = Some(DkimMatch {
            selector: selector.to_string(),
            record: record.to_string(),
        });
        true
    }

    fn take(&self) -> Option<DkimMatch> {
        self.lock().take()
    }
}

/// What one selector task saw.
struct SelectorProbe {
    index: usize,
    details: Vec<Detail>,
    failed: bool,
}

async fn probe_selector(
    index: usize,
    selector: String,
    domain: Domain,
    resolver: Arc<dyn TxtResolver>,
    winner: Arc<WinnerSlot>,
    verbose: bool,
) -> SelectorProbe {
    let name = dkim_name(&selector, domain.as_str());
    let mut probe = SelectorProbe {
        index,
        details: Vec::new(),
        failed: false,
    };

    let records = match resolver.lookup_txt(&name).await {
        Ok(records) => records,
        Err(e) => {
            // Missing selectors are the common case; only real failures are echoed.
            if e.is_failure() {
                probe.failed = true;
                if verbose {
                    probe.details.push(Detail::LookupError(e.to_string()));
                }
            }
            return probe;
        }
    };

    for txt in &records {
        let record = txt.trim();
        if verbose {
            probe.details.push(Detail::Record {
                name: name.clone(),
                text: record.to_string(),
            });
        }
        if has_version_tag(record, RecordKind::Dkim.version_tag()) {
            winner.claim(domain.as_str(), &selector, record);
            break;
        }
    }
    probe
}

/// Probes every selector in `selectors` for a DKIM record on `domain`.
///
/// Produces a single outcome regardless of how many selectors match. When
/// several match, which one is reported depends on lookup timing.
pub async fn probe_dkim(
    resolver: Arc<dyn TxtResolver>,
    domain: &Domain,
    selectors: &SelectorSet,
    verbose: bool,
) -> CheckOutcome {
    let winner = Arc::new(WinnerSlot::default());
    let mut tasks = JoinSet::new();

    for (index, selector) in selectors.iter().enumerate() {
        tasks.spawn(probe_selector(
            index,
            selector.to_string(),
            domain.clone(),
            Arc::clone(&resolver),
            Arc::clone(&winner),
            verbose,
        ));
    }

    let mut probes = Vec::with_capacity(selectors.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(probe) => probes.push(probe),
            Err(e) => warn!("DKIM selector task for {domain} did not complete: {e}"),
        }
    }
    // Verbose output follows selector order, not completion order.
    probes.sort_by_key(|probe| probe.index);

    let mut outcome = match winner.take() {
        Some(DkimMatch { selector, record }) => {
            let mut outcome = CheckOutcome::found(RecordKind::Dkim, record);
            outcome.selector = Some(selector);
            outcome
        }
        None => CheckOutcome::not_found(RecordKind::Dkim),
    };
    outcome.failed_lookups = probes.iter().filter(|probe| probe.failed).count();
    if verbose {
        outcome.details = probes
            .into_iter()
            .flat_map(|probe| probe.details)
            .collect();
        if let Some(record) = &outcome.record {
            outcome.details.push(Detail::Matched(record.clone()));
        }
    }
    outcome
}
