//! Result rendering and output.
//!
//! Workers hand finished [`DomainReport`]s to a single reporter task, which
//! writes each domain's block in one piece so blocks never interleave.

mod style;

use std::io::Write;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::Domain;
use crate::checks::{CheckOutcome, CheckStatus, Detail, RecordKind};
use crate::config::DOMAIN_SEPARATOR;

pub use style::Style;

/// All outcomes for one domain, in check order.
#[derive(Debug, Clone)]
pub struct DomainReport {
    /// Domain the block is for
    pub domain: Domain,
    /// One outcome per checked record kind
    pub outcomes: Vec<CheckOutcome>,
}

/// The tagged result message for an outcome, without styling.
pub fn outcome_message(outcome: &CheckOutcome) -> String {
    match (outcome.kind, outcome.status) {
        (RecordKind::Spf, CheckStatus::Found) => "SPF record found.".to_string(),
        (RecordKind::Spf, CheckStatus::NotFound) => "No SPF record found.".to_string(),
        (RecordKind::Dkim, CheckStatus::Found) => format!(
            "DKIM record found with selector '{}'.",
            outcome.selector.as_deref().unwrap_or_default()
        ),
        (RecordKind::Dkim, CheckStatus::NotFound) => {
            "No DKIM record found with provided selectors.".to_string()
        }
        (RecordKind::Dmarc, CheckStatus::Found) => "DMARC record found.".to_string(),
        (RecordKind::Dmarc, CheckStatus::NotFound) => "No DMARC record found.".to_string(),
    }
}

fn render_detail(kind: RecordKind, detail: &Detail) -> String {
    match detail {
        Detail::LookupError(error) => {
            format!("Error fetching TXT records for {}: {error}", kind.as_str())
        }
        Detail::Record { name, text } => format!("TXT Record for {name}: {text}"),
        Detail::Matched(text) | Detail::Note(text) => text.clone(),
    }
}

/// Renders one outcome: the tagged line, then any verbose detail lines.
pub fn render_outcome(outcome: &CheckOutcome, style: &Style) -> Vec<String> {
    let tag = format!("[{}]", outcome.kind.as_str());
    let message = outcome_message(outcome);
    let line = if outcome.is_found() {
        format!("{} {}", style.found(&tag), style.found(&message))
    } else {
        format!("{} {}", style.not_found(&tag), style.not_found(&message))
    };

    let mut lines = vec![line];
    lines.extend(
        outcome
            .details
            .iter()
            .map(|detail| render_detail(outcome.kind, detail)),
    );
    lines
}

impl DomainReport {
    /// Renders the whole block for this domain, separator included.
    pub fn render(&self, style: &Style) -> String {
        let mut block = style.header(&format!("Checking domain: {}", self.domain));
        block.push('\n');
        for outcome in &self.outcomes {
            for line in render_outcome(outcome, style) {
                block.push_str(&line);
                block.push('\n');
            }
        }
        block.push_str(DOMAIN_SEPARATOR);
        block.push('\n');
        block
    }
}

/// Startup banner.
pub fn banner(style: &Style) -> String {
    let lines = [
        "*******************************************",
        "* mailauth_scan: SPF / DKIM / DMARC check *",
        "*******************************************",
    ];
    let mut out = String::new();
    for line in lines {
        out.push_str(&style.banner(line));
        out.push('\n');
    }
    out
}

/// Spawns the reporter: writes every received report to `out` until all
/// senders are dropped, then hands `out` back.
pub fn spawn_reporter<W>(
    mut out: W,
    style: Style,
    mut reports: mpsc::Receiver<DomainReport>,
) -> JoinHandle<std::io::Result<W>>
where
    W: Write + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        while let Some(report) = reports.blocking_recv() {
            out.write_all(report.render(&style).as_bytes())?;
            out.flush()?;
        }
        Ok(out)
    })
}
