//! DMARC checker.

use crate::app::Domain;
use crate::dns::{dmarc_name, TxtResolver};

use super::txt::match_txt_records;
use super::types::{CheckOutcome, RecordKind};

/// Checks `_dmarc.<domain>` for a DMARC record, stopping at the first match.
pub async fn check_dmarc(
    resolver: &dyn TxtResolver,
    domain: &Domain,
    verbose: bool,
) -> CheckOutcome {
    let name = dmarc_name(domain.as_str());
    match_txt_records(resolver, RecordKind::Dmarc, &name, true, verbose).await
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
    async fn test_dmarc_found_at_dmarc_subdomain() {
        let resolver = FixtureResolver::new()
            .with_txt("_dmarc.example.com", "v=DMARC1; p=reject; rua=mailto:d@example.com");
        let outcome = check_dmarc(&resolver, &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::Found);
    }

    #[tokio::test]
    async fn test_dmarc_ignores_apex_records() {
        let resolver = FixtureResolver::new().with_txt("example.com", "v=DMARC1; p=none");
        let outcome = check_dmarc(&resolver, &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::NotFound);
    }

    #[tokio::test]
    async fn test_dmarc_stops_at_first_match() {
        let resolver = FixtureResolver::new()
            .with_txt("_dmarc.example.com", "v=DMARC1; p=none")
            .with_txt("_dmarc.example.com", "v=dmarc1; p=reject");
        let outcome = check_dmarc(&resolver, &domain(), true).await;
        assert!(outcome.is_found());
        assert_eq!(outcome.record.as_deref(), Some("v=DMARC1; p=none"));
        let matched = outcome
            .details
            .iter()
            .filter(|d| matches!(d, Detail::Matched(_)))
            .count();
        assert_eq!(matched, 1);
        // The second record was never examined.
        let seen = outcome
            .details
            .iter()
            .filter(|d| matches!(d, Detail::Record { .. }))
            .count();
        assert_eq!(seen, 1);
    }

    #[tokio::test]
    async fn test_dmarc_missing_name_is_not_found() {
        let outcome = check_dmarc(&FixtureResolver::new(), &domain(), false).await;
        assert_eq!(outcome.status, CheckStatus::NotFound);
        assert_eq!(outcome.failed_lookups, 0);
    }
}
