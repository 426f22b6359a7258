//! Scan workers and per-domain processing.
//!
//! Workers are long-lived: each pulls [`ScanJob`]s from the shared handoff
//! until it is closed and drained, runs the mode's checks, and forwards one
//! [`DomainReport`] per domain to the reporter.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{mpsc, Mutex};

use crate::app::{Domain, SelectorSet};
use crate::checks::run_check;
use crate::config::ScanMode;
use crate::dns::TxtResolver;
use crate::error_handling::ScanStats;
use crate::report::DomainReport;

/// One domain to scan, consumed by exactly one worker.
#[derive(Debug, Clone)]
pub struct ScanJob {
    /// Domain to check
    pub domain: Domain,
    /// Checks to run, in order
    pub mode: ScanMode,
}

/// State shared by every worker for the duration of a scan.
pub(super) struct WorkerContext {
    pub resolver: Arc<dyn TxtResolver>,
    pub selectors: Arc<SelectorSet>,
    pub verbose: bool,
    pub stats: Arc<ScanStats>,
    pub reports: mpsc::Sender<DomainReport>,
}

/// Runs every check of `job.mode` against `job.domain`, in order.
///
/// Produces exactly one outcome per checked record kind.
pub async fn scan_domain(
    job: &ScanJob,
    resolver: &Arc<dyn TxtResolver>,
    selectors: &SelectorSet,
    verbose: bool,
) -> DomainReport {
    let mut outcomes = Vec::with_capacity(job.mode.checks().len());
    for &kind in job.mode.checks() {
        outcomes.push(run_check(kind, resolver, &job.domain, selectors, verbose).await);
    }
    DomainReport {
        domain: job.domain.clone(),
        outcomes,
    }
}

/// Worker loop: take the next job, scan it, report it.
pub(super) async fn scan_worker(
    worker_id: usize,
    jobs: Arc<Mutex<mpsc::Receiver<ScanJob>>>,
    ctx: Arc<WorkerContext>,
) {
    debug!("Scan worker {} started", worker_id);

    loop {
        // Hold the lock only while waiting for the next job.
        let job = {
            let mut rx = jobs.lock().await;
            rx.recv().await
        };
        let Some(job) = job else { break };

        debug!("Worker {} checking {}", worker_id, job.domain);
        let report = scan_domain(&job, &ctx.resolver, &ctx.selectors, ctx.verbose).await;

        ctx.stats.increment_domains();
        for outcome in &report.outcomes {
            ctx.stats.record(outcome.kind, outcome.is_found());
            for _ in 0..outcome.failed_lookups {
                ctx.stats.increment_lookup_errors();
            }
        }

        if ctx.reports.send(report).await.is_err() {
            warn!("Reporter stopped, worker {} exiting", worker_id);
            break;
        }
    }

    debug!("Scan worker {} completed", worker_id);
}
