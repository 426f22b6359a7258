//! Shared TXT scan used by the SPF and DMARC checkers.

use crate::dns::{has_version_tag, TxtResolver};

use super::types::{CheckOutcome, Detail, RecordKind};

/// Looks up `name` and matches its records against the version tag of `kind`.
///
/// With `stop_at_first` the scan ends on the first match; otherwise every
/// record is examined and every match is echoed when verbose.
pub(super) async fn match_txt_records(
    resolver: &dyn TxtResolver,
    kind: RecordKind,
    name: &str,
    stop_at_first: bool,
    verbose: bool,
) -> CheckOutcome {
    let records = match resolver.lookup_txt(name).await {
        Ok(records) => records,
        Err(e) => {
            log::debug!("{} lookup for {name} returned no records: {e}", kind.as_str());
            let mut outcome = CheckOutcome::not_found(kind);
            if e.is_failure() {
                outcome.failed_lookups = 1;
            }
            if verbose {
                outcome.details.push(Detail::LookupError(e.to_string()));
            }
            return outcome;
        }
    };

    let tag = kind.version_tag();
    let mut seen = Vec::new();
    let mut matched: Vec<String> = Vec::new();
    for txt in &records {
        let record = txt.trim();
        if verbose {
            seen.push(Detail::Record {
                name: name.to_string(),
                text: record.to_string(),
            });
        }
        if has_version_tag(record, tag) {
            matched.push(record.to_string());
            if stop_at_first {
                break;
            }
        }
    }

    let mut outcome = match matched.first() {
        Some(first) => CheckOutcome::found(kind, first.clone()),
        None => CheckOutcome::not_found(kind),
    };
    if verbose {
        outcome.details = seen;
        if matched.len() > 1 {
            outcome.details.push(Detail::Note(format!(
                "Warning: {} {} records published for {name}",
                matched.len(),
                kind.as_str()
            )));
        }
        outcome
            .details
            .extend(matched.into_iter().map(Detail::Matched));
    }
    outcome
}
