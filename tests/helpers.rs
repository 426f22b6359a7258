// Shared test helpers for running scans against fixture resolvers.
//
// This module is included by several test files with `mod helpers;`.

use std::sync::Arc;

use mailauth_scan::{
    dispatch_scan, Domain, FixtureResolver, ScanMode, ScanReport, ScanSettings, SelectorSet,
    Style, TxtResolver,
};

/// Builds domains from endpoint strings, panicking on empty ones.
#[allow(dead_code)] // Used by other test files
pub fn domains(names: &[&str]) -> Vec<Domain> {
    names
        .iter()
        .map(|name| Domain::parse(name).expect("test domain should not be empty"))
        .collect()
}

/// Plain-style settings with the given mode, pool size and verbosity.
#[allow(dead_code)]
pub fn settings(mode: ScanMode, workers: usize, verbose: bool) -> ScanSettings {
    ScanSettings {
        mode,
        verbose,
        workers,
        style: Style::plain(),
    }
}

/// Runs a scan into an in-memory buffer and returns the report and output text.
#[allow(dead_code)]
pub async fn run_plain(
    names: &[&str],
    resolver: Arc<dyn TxtResolver>,
    settings: &ScanSettings,
) -> (ScanReport, String) {
    let (report, out) = dispatch_scan(
        domains(names),
        SelectorSet::defaults(),
        resolver,
        settings,
        Vec::new(),
    )
    .await
    .expect("scan should succeed");
    (report, String::from_utf8(out).expect("output is UTF-8"))
}

/// A fixture with full SPF, DKIM (selector `google`) and DMARC for `domain`.
#[allow(dead_code)]
pub fn fully_configured(resolver: FixtureResolver, domain: &str) -> FixtureResolver {
    resolver
        .with_txt(domain, "v=spf1 include:_spf.google.com ~all")
        .with_txt(
            &format!("google._domainkey.{domain}"),
            "v=DKIM1; k=rsa; p=MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA",
        )
        .with_txt(&format!("_dmarc.{domain}"), "v=DMARC1; p=reject")
}

/// Counts lines of `output` equal to `line`.
#[allow(dead_code)]
pub fn count_lines(output: &str, line: &str) -> usize {
    output.lines().filter(|l| *l == line).count()
}

/// Splits output into per-domain blocks keyed by domain name.
#[allow(dead_code)]
pub fn blocks(output: &str) -> Vec<(String, Vec<String>)> {
    let mut result = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;
    for line in output.lines() {
        if let Some(domain) = line.strip_prefix("Checking domain: ") {
            current = Some((domain.to_string(), Vec::new()));
        } else if line == "-------------------------------" {
            if let Some(block) = current.take() {
                result.push(block);
            }
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.to_string());
        }
    }
    result
}
