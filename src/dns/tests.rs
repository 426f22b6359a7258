//! DNS module tests.

use super::*;
use std::time::Duration;

#[test]
fn test_has_version_tag_is_case_insensitive() {
    assert!(has_version_tag("v=spf1 include:_spf.example.com ~all", "v=spf1"));
    assert!(has_version_tag("V=SPF1 -all", "v=spf1"));
    assert!(has_version_tag("v=dmarc1; p=none", "v=DMARC1"));
    assert!(has_version_tag("v=DKIM1; k=rsa; p=MIGf", "v=DKIM1"));
}

#[test]
fn test_has_version_tag_trims_whitespace() {
    assert!(has_version_tag("   v=spf1 -all  ", "v=spf1"));
    assert!(has_version_tag("\tv=DMARC1; p=reject", "v=DMARC1"));
}

#[test]
fn test_has_version_tag_requires_prefix() {
    assert!(!has_version_tag("google-site-verification=abc v=spf1", "v=spf1"));
    assert!(!has_version_tag("v=spf", "v=spf1"));
    assert!(!has_version_tag("", "v=spf1"));
    // Multi-byte input shorter than the tag must not panic.
    assert!(!has_version_tag("é", "v=spf1"));
    assert!(!has_version_tag("v=spé1", "v=spf1"));
}

#[test]
fn test_query_names() {
    assert_eq!(dmarc_name("example.com"), "_dmarc.example.com");
    assert_eq!(
        dkim_name("selector1", "example.com"),
        "selector1._domainkey.example.com"
    );
}

#[tokio::test]
async fn test_fixture_returns_configured_records() {
    let resolver = FixtureResolver::new()
        .with_txt("example.com", "v=spf1 -all")
        .with_txt("example.com", "unrelated");

    let records = resolver.lookup_txt("example.com").await.unwrap();
    assert_eq!(records, vec!["v=spf1 -all", "unrelated"]);
}

#[tokio::test]
async fn test_fixture_unknown_name_has_no_records() {
    let resolver = FixtureResolver::new();
    let err = resolver.lookup_txt("nodns.test").await.unwrap_err();
    assert_eq!(
        err,
        LookupError::NoRecords {
            name: "nodns.test".to_string()
        }
    );
    assert!(!err.is_failure());
}

#[tokio::test]
async fn test_fixture_names_are_case_insensitive() {
    let resolver = FixtureResolver::new().with_txt("_DMARC.Example.com.", "v=DMARC1; p=none");
    let records = resolver.lookup_txt("_dmarc.example.com").await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_fixture_failures() {
    let resolver = FixtureResolver::new()
        .with_txt("example.com", "v=spf1 -all")
        .with_failure("example.com", "i/o timeout");
    let err = resolver.lookup_txt("example.com").await.unwrap_err();
    assert!(err.is_failure());
    assert!(err.to_string().contains("i/o timeout"));

    let resolver = FixtureResolver::failing_all("SERVFAIL");
    for name in ["a.test", "_dmarc.a.test", "default._domainkey.a.test"] {
        assert!(resolver.lookup_txt(name).await.unwrap_err().is_failure());
    }
    assert_eq!(resolver.lookup_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_fixture_latency() {
    let resolver = FixtureResolver::new()
        .with_txt("slow.test", "v=spf1 -all")
        .with_latency("slow.test", Duration::from_secs(2));

    let start = tokio::time::Instant::now();
    let records = resolver.lookup_txt("slow.test").await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(resolver.lookup_count(), 1);
}
