//! Scan statistics tracking.
//!
//! Thread-safe counters updated by every worker while a scan runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::checks::RecordKind;

/// Thread-safe scan statistics tracker.
///
/// Tracks per-record-kind outcomes using atomic counters, allowing concurrent
/// access from all workers. All kinds are initialized to zero on creation.
pub struct ScanStats {
    found: HashMap<RecordKind, AtomicUsize>,
    not_found: HashMap<RecordKind, AtomicUsize>,
    lookup_errors: AtomicUsize,
    domains: AtomicUsize,
}

impl ScanStats {
    pub fn new() -> Self {
        let mut found = HashMap::new();
        let mut not_found = HashMap::new();
        for kind in RecordKind::iter() {
            found.insert(kind, AtomicUsize::new(0));
            not_found.insert(kind, AtomicUsize::new(0));
        }

        ScanStats {
            found,
            not_found,
            lookup_errors: AtomicUsize::new(0),
            domains: AtomicUsize::new(0),
        }
    }

    /// Records one check outcome for `kind`.
    pub fn record(&self, kind: RecordKind, found: bool) {
        let map = if found { &self.found } else { &self.not_found };
        if let Some(counter) = map.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("No counter for record kind {:?}", kind);
        }
    }

    pub fn increment_lookup_errors(&self) {
        self.lookup_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_domains(&self) {
        self.domains.fetch_add(1, Ordering::Relaxed);
    }

    pub fn found(&self, kind: RecordKind) -> usize {
        self.found
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn not_found(&self, kind: RecordKind) -> usize {
        self.not_found
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Resolver failures other than "no such record" (timeouts, network).
    pub fn lookup_errors(&self) -> usize {
        self.lookup_errors.load(Ordering::SeqCst)
    }

    pub fn domains(&self) -> usize {
        self.domains.load(Ordering::SeqCst)
    }

    pub fn total_checks(&self) -> usize {
        RecordKind::iter()
            .map(|kind| self.found(kind) + self.not_found(kind))
            .sum()
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
