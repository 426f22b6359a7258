//! SPF checker.

use crate::app::Domain;
use crate::dns::TxtResolver;

use super::txt::match_txt_records;
use super::types::{CheckOutcome, RecordKind};

/// Checks the TXT records of `domain` itself for an SPF record.
///
/// Every returned record is examined, so duplicate SPF records are surfaced in
/// verbose mode. The outcome is `Found` if any record carries `v=spf1`.
pub async fn check_spf(resolver: &dyn TxtResolver, domain: &Domain, verbose: bool) -> CheckOutcome {
    match_txt_records(resolver, RecordKind::Spf, domain.as_str(), false, verbose).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckStatus, Detail};
    use crate::dns::FixtureResolver;

    fn domain() -> Domain {
        Domain::parse("example.com").unwrap()
    }

    #[tokio::test]
    async fn test_spf_found_among_unrelated_records() {
        let resolver = FixtureResolver::new()
            .with_txt("example.com", "google-site-verification=abc")
            .with_txt("example.com", "v=spf1 include:_spf.example.com ~all")
            .with_txt("example.com", "unrelated text");
        let outcome = check_spf(&resolver, &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::Found);
        assert_eq!(
            outcome.record.as_deref(),
            Some("v=spf1 include:_spf.example.com ~all")
        );
        assert!(outcome.details.is_empty());
    }

    #[tokio::test]
    async fn test_spf_not_found_without_tag() {
        let resolver = FixtureResolver::new()
            .with_txt("example.com", "unrelated")
            .with_txt("example.com", "also unrelated");
        let outcome = check_spf(&resolver, &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::NotFound);
        assert_eq!(outcome.record, None);
    }

    #[tokio::test]
    async fn test_spf_lookup_error_is_not_found() {
        let resolver = FixtureResolver::failing_all("i/o timeout");
        let outcome = check_spf(&resolver, &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::NotFound);
        assert_eq!(outcome.failed_lookups, 1);
        assert!(outcome.details.is_empty());
    }

    #[tokio::test]
    async fn test_spf_verbose_surfaces_error_text() {
        let resolver = FixtureResolver::failing_all("i/o timeout");
        let outcome = check_spf(&resolver, &domain(), true).await;
        assert_eq!(outcome.status, CheckStatus::NotFound);
        match outcome.details.as_slice() {
            [Detail::LookupError(text)] => assert!(text.contains("i/o timeout")),
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spf_scans_all_records_and_reports_duplicates() {
        let resolver = FixtureResolver::new()
            .with_txt("example.com", "v=spf1 -all")
            .with_txt("example.com", "V=SPF1 include:other.test ~all");
        let outcome = check_spf(&resolver, &domain(), true).await;
        assert!(outcome.is_found());
        assert_eq!(outcome.record.as_deref(), Some("v=spf1 -all"));

        let matched: Vec<&Detail> = outcome
            .details
            .iter()
            .filter(|d| matches!(d, Detail::Matched(_)))
            .collect();
        assert_eq!(matched.len(), 2);
        assert!(outcome
            .details
            .iter()
            .any(|d| matches!(d, Detail::Note(note) if note.contains("2 SPF records"))));
    }
}
