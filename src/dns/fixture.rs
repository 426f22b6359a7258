//! In-memory TXT resolver.
//!
//! Answers from a table keyed by query name, so scans can run without a
//! network. Names are matched case-insensitively and a trailing dot is ignored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use super::{LookupError, TxtResolver};

#[derive(Default)]
struct FixtureTable {
    records: HashMap<String, Vec<String>>,
    failures: HashMap<String, String>,
    latency: HashMap<String, Duration>,
    fail_all: Option<String>,
    default_latency: Option<Duration>,
}

/// TXT resolver answering from fixtures.
///
/// Unknown names return `LookupError::NoRecords`.
#[derive(Default)]
pub struct FixtureResolver {
    table: Mutex<FixtureTable>,
    lookups: AtomicUsize,
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

impl FixtureResolver {
    /// An empty fixture: every lookup returns `NoRecords`.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, FixtureTable> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds one TXT record at `name`.
    pub fn add_txt(&self, name: &str, value: &str) {
        self.table()
            .records
            .entry(normalize(name))
            .or_default()
            .push(value.to_string());
    }

    /// Makes every lookup of `name` fail with `message`.
    pub fn add_failure(&self, name: &str, message: &str) {
        self.table()
            .failures
            .insert(normalize(name), message.to_string());
    }

    /// Delays every lookup of `name` by `delay`.
    pub fn add_latency(&self, name: &str, delay: Duration) {
        self.table().latency.insert(normalize(name), delay);
    }

    /// Builder form of [`add_txt`](Self::add_txt).
    pub fn with_txt(self, name: &str, value: &str) -> Self {
        self.add_txt(name, value);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, name: &str, message: &str) -> Self {
        self.add_failure(name, message);
        self
    }

    /// Builder form of [`add_latency`](Self::add_latency).
    pub fn with_latency(self, name: &str, delay: Duration) -> Self {
        self.add_latency(name, delay);
        self
    }

    /// Delays lookups of names without their own latency entry.
    pub fn with_default_latency(self, delay: Duration) -> Self {
        self.table().default_latency = Some(delay);
        self
    }

    /// Makes every lookup fail, regardless of the records table.
    pub fn failing_all(message: &str) -> Self {
        let resolver = Self::new();
        resolver.table().fail_all = Some(message.to_string());
        resolver
    }

    /// Number of lookups served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TxtResolver for FixtureResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let key = normalize(name);

        // Copy the answer out so the lock is not held across the sleep.
        let (delay, answer) = {
            let table = self.table();
            let delay = table
                .latency
                .get(&key)
                .copied()
                .or(table.default_latency);
            let answer = if let Some(message) = table.fail_all.as_ref().or(table.failures.get(&key))
            {
                Err(LookupError::Failed {
                    name: name.to_string(),
                    message: message.clone(),
                })
            } else {
                match table.records.get(&key) {
                    Some(records) if !records.is_empty() => Ok(records.clone()),
                    _ => Err(LookupError::NoRecords {
                        name: name.to_string(),
                    }),
                }
            };
            (delay, answer)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        answer
    }
}
