//! Scan dispatcher.
//!
//! A fixed pool of workers is started before the first domain is sent. Domains
//! are handed over one at a time through a channel of capacity
//! [`HANDOFF_CAPACITY`], so once every worker is busy the sender waits. This
//! caps in-flight DNS queries at roughly `workers × checks per domain`.
//! Domains may finish in any order; each domain's output block is written
//! whole.

mod task;

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use strum::IntoEnumIterator;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::app::{collect_domains, load_selectors, print_scan_statistics, Domain, SelectorSet};
use crate::checks::RecordKind;
use crate::config::{Config, ScanMode, MAX_WORKERS, REPORT_BUFFER};
use crate::dns::{HickoryTxtResolver, TxtResolver};
use crate::error_handling::{ScanError, ScanStats};
use crate::initialization::init_resolver;
use crate::report::{spawn_reporter, Style};

pub use task::{scan_domain, ScanJob};

use task::{scan_worker, WorkerContext};

/// Pending jobs the handoff holds beyond the ones workers are running.
///
/// tokio channels need a capacity of at least one, so this is the closest to a
/// rendezvous handoff.
pub const HANDOFF_CAPACITY: usize = 1;

/// Settings that drive the dispatcher.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Checks run for every domain
    pub mode: ScanMode,
    /// Echo raw TXT records and resolver errors
    pub verbose: bool,
    /// Worker pool size (at least 1)
    pub workers: usize,
    /// Styles for the result stream
    pub style: Style,
}

impl From<&Config> for ScanSettings {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.mode,
            verbose: config.verbose,
            workers: config.workers,
            style: Style::new(config.color),
        }
    }
}

/// Found / missing totals for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSummary {
    /// Record kind these totals are for
    pub kind: RecordKind,
    /// Domains where the record was found
    pub found: usize,
    /// Domains where it was missing or the lookup failed
    pub not_found: usize,
}

/// Results of a scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Number of domains scanned
    pub total_domains: usize,
    /// Totals per record kind, in SPF, DKIM, DMARC order
    pub checks: Vec<KindSummary>,
    /// Lookups that failed (timeouts, network) and were reported as missing
    pub lookup_errors: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ScanReport {
    fn from_stats(stats: &ScanStats, elapsed_seconds: f64) -> Self {
        Self {
            total_domains: stats.domains(),
            checks: RecordKind::iter()
                .map(|kind| KindSummary {
                    kind,
                    found: stats.found(kind),
                    not_found: stats.not_found(kind),
                })
                .collect(),
            lookup_errors: stats.lookup_errors(),
            elapsed_seconds,
        }
    }

    /// Totals for `kind`, if that kind was part of the report.
    pub fn summary(&self, kind: RecordKind) -> Option<&KindSummary> {
        self.checks.iter().find(|summary| summary.kind == kind)
    }
}

fn check_pool_size(workers: usize) -> Result<(), ScanError> {
    match workers {
        0 => Err(ScanError::ZeroWorkers),
        n if n > MAX_WORKERS => Err(ScanError::TooManyWorkers(n)),
        _ => Ok(()),
    }
}

/// Scans `domains` with a pool of `settings.workers` workers, writing every
/// domain's result block to `out`.
///
/// Returns the report together with `out` once every worker has exited and
/// all output has been written.
///
/// # Errors
///
/// - `ScanError::ZeroWorkers` / `ScanError::TooManyWorkers` if the pool size
///   is outside `1..=MAX_WORKERS` (checked before any work starts)
/// - An error if every worker exited before all domains were handed off
/// - I/O errors from writing to `out`
pub async fn dispatch_scan<W>(
    domains: Vec<Domain>,
    selectors: SelectorSet,
    resolver: Arc<dyn TxtResolver>,
    settings: &ScanSettings,
    out: W,
) -> Result<(ScanReport, W)>
where
    W: Write + Send + 'static,
{
    check_pool_size(settings.workers)?;

    let start_time = Instant::now();
    let stats = Arc::new(ScanStats::new());

    let (report_tx, report_rx) = mpsc::channel(REPORT_BUFFER);
    let reporter = spawn_reporter(out, settings.style, report_rx);

    let (job_tx, job_rx) = mpsc::channel::<ScanJob>(HANDOFF_CAPACITY);
    let job_rx = Arc::new(Mutex::new(job_rx));

    let ctx = Arc::new(WorkerContext {
        resolver,
        selectors: Arc::new(selectors),
        verbose: settings.verbose,
        stats: Arc::clone(&stats),
        reports: report_tx,
    });

    // Every worker exists before the first domain is sent.
    let mut workers = JoinSet::new();
    for worker_id in 0..settings.workers {
        workers.spawn(scan_worker(worker_id, Arc::clone(&job_rx), Arc::clone(&ctx)));
    }
    // Workers own the only report senders now; the reporter ends when they do.
    drop(ctx);

    info!(
        "Scanning {} domain(s) with {} worker(s), mode {}",
        domains.len(),
        settings.workers,
        settings.mode
    );

    let mut handoff_failed = false;
    for domain in domains {
        let job = ScanJob {
            domain,
            mode: settings.mode,
        };
        if job_tx.send(job).await.is_err() {
            handoff_failed = true;
            break;
        }
    }
    drop(job_tx);

    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            warn!("Scan worker did not complete: {e}");
        }
    }

    let out = reporter
        .await
        .context("Reporter task failed")?
        .context("Failed to write scan results")?;

    if handoff_failed {
        anyhow::bail!("All scan workers stopped before every domain was dispatched");
    }

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_scan_statistics(&stats, elapsed_seconds);
    Ok((ScanReport::from_stats(&stats, elapsed_seconds), out))
}

/// Runs a scan with the provided configuration.
///
/// Collects domains from the configured input, loads the selector set,
/// resolves through the system DNS configuration and writes results to stdout.
///
/// # Errors
///
/// This function will return an error if:
/// - The domain list cannot be read (a bad selector file only logs a warning)
/// - The worker pool size is zero
/// - The DNS resolver cannot be initialized
///
/// # Example
///
/// ```no_run
/// use mailauth_scan::{run_scan, Config, InputSource, ScanMode};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: InputSource::Single("example.com".to_string()),
///     mode: ScanMode::Spf,
///     ..Default::default()
/// };
/// let report = run_scan(config).await?;
/// println!("Scanned {} domains", report.total_domains);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    let settings = ScanSettings::from(&config);
    check_pool_size(settings.workers)?;

    let domains = collect_domains(&config.input)
        .await
        .context("Failed to collect domains")?;
    let selectors = load_selectors(config.selector_file.as_deref()).await;

    let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
    let resolver: Arc<dyn TxtResolver> = Arc::new(HickoryTxtResolver::new(resolver));

    let (report, _stdout) =
        dispatch_scan(domains, selectors, resolver, &settings, std::io::stdout()).await?;
    Ok(report)
}
