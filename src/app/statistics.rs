//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::checks::RecordKind;
use crate::error_handling::ScanStats;

/// Logs per-record-kind totals for a finished scan.
pub fn print_scan_statistics(stats: &ScanStats, elapsed_seconds: f64) {
    info!(
        "Scanned {} domain{} ({} checks) in {:.1}s",
        stats.domains(),
        if stats.domains() == 1 { "" } else { "s" },
        stats.total_checks(),
        elapsed_seconds
    );

    for kind in RecordKind::iter() {
        let found = stats.found(kind);
        let not_found = stats.not_found(kind);
        if found + not_found > 0 {
            info!("   {}: {} found, {} missing", kind.as_str(), found, not_found);
        }
    }

    if stats.lookup_errors() > 0 {
        info!(
            "   {} lookup(s) failed and were reported as missing",
            stats.lookup_errors()
        );
    }
}
