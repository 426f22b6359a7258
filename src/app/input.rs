//! Domain input collection and endpoint sanitization.

use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error_handling::InputError;

/// Where the domains to scan come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One endpoint given on the command line
    Single(String),
    /// A file with one endpoint per line
    ListFile(PathBuf),
    /// Endpoints piped on stdin
    Stdin,
}

/// A sanitized host name, immutable once built.
///
/// Cloning is cheap; every checker for the domain shares the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(Arc<str>);

impl Domain {
    /// Sanitizes `endpoint` into a domain, or `None` if nothing is left.
    pub fn parse(endpoint: &str) -> Option<Self> {
        let host = sanitize_endpoint(endpoint);
        if host.is_empty() {
            None
        } else {
            Some(Domain(Arc::from(host)))
        }
    }

    /// The host name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strips scheme, trailing slash and path from an endpoint.
///
/// `https://example.com/login` becomes `example.com`. Only `http://` and
/// `https://` prefixes are removed; the host itself is left untouched.
pub fn sanitize_endpoint(endpoint: &str) -> &str {
    let mut host = endpoint.trim();
    if let Some(rest) = host.strip_prefix("http://") {
        host = rest;
    } else if let Some(rest) = host.strip_prefix("https://") {
        host = rest;
    }
    let host = host.strip_suffix('/').unwrap_or(host);
    match host.split_once('/') {
        Some((head, _)) => head,
        None => host,
    }
}

/// Reads one endpoint per line, skipping blank and `#` comment lines.
pub async fn read_domains<R>(reader: R) -> std::io::Result<Vec<Domain>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match Domain::parse(trimmed) {
            Some(domain) => domains.push(domain),
            None => debug!("Skipping endpoint with no host: {trimmed}"),
        }
    }
    Ok(domains)
}

/// Reads domains piped on stdin.
///
/// `interactive` is whether stdin is a terminal; nothing is read then, since
/// the user forgot to give any input.
pub async fn read_piped_domains<R>(reader: R, interactive: bool) -> Result<Vec<Domain>, InputError>
where
    R: AsyncBufRead + Unpin,
{
    if interactive {
        return Err(InputError::NoInput);
    }
    info!("Reading domains from stdin");
    read_domains(reader).await.map_err(InputError::Stdin)
}

/// Collects the domains to scan from `source`.
///
/// # Errors
///
/// - `InputError::EmptyEndpoint` if the `-u` endpoint has no host
/// - `InputError::ListFile` if the list file cannot be opened or read
/// - `InputError::Stdin` if reading piped input fails
/// - `InputError::NoInput` if stdin is a terminal (nothing piped)
pub async fn collect_domains(source: &InputSource) -> Result<Vec<Domain>, InputError> {
    let domains = match source {
        InputSource::Single(endpoint) => match Domain::parse(endpoint) {
            Some(domain) => vec![domain],
            None => return Err(InputError::EmptyEndpoint(endpoint.clone())),
        },
        InputSource::ListFile(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| InputError::ListFile {
                    path: path.clone(),
                    source,
                })?;
            read_domains(BufReader::new(file))
                .await
                .map_err(|source| InputError::ListFile {
                    path: path.clone(),
                    source,
                })?
        }
        InputSource::Stdin => {
            let interactive = std::io::stdin().is_terminal();
            read_piped_domains(BufReader::new(tokio::io::stdin()), interactive).await?
        }
    };
    if domains.is_empty() {
        warn!("No domains to scan");
    } else {
        info!("Collected {} domain(s)", domains.len());
    }
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_scheme() {
        assert_eq!(sanitize_endpoint("https://example.com"), "example.com");
        assert_eq!(sanitize_endpoint("http://example.com"), "example.com");
    }

    #[test]
    fn test_sanitize_strips_trailing_slash_and_path() {
        assert_eq!(sanitize_endpoint("example.com/"), "example.com");
        assert_eq!(
            sanitize_endpoint("https://example.com/login/index.html"),
            "example.com"
        );
        assert_eq!(sanitize_endpoint("example.com/a/b/"), "example.com");
    }

    #[test]
    fn test_sanitize_leaves_bare_host_alone() {
        assert_eq!(sanitize_endpoint("mail.example.co.uk"), "mail.example.co.uk");
        assert_eq!(sanitize_endpoint("  example.com  "), "example.com");
    }

    #[test]
    fn test_sanitize_only_strips_one_scheme() {
        assert_eq!(sanitize_endpoint("ftp://example.com"), "ftp:");
        assert_eq!(sanitize_endpoint("https://http://x"), "http:");
    }

    #[test]
    fn test_domain_parse_rejects_empty() {
        assert!(Domain::parse("").is_none());
        assert!(Domain::parse("https://").is_none());
        assert!(Domain::parse("/").is_none());
        assert_eq!(Domain::parse("https://a.com/").unwrap().as_str(), "a.com");
    }

    #[tokio::test]
    async fn test_read_domains_skips_blank_and_comment_lines() {
        let input = b"# targets\nexample.com\n\n   \nhttps://rust-lang.org/learn\n# end\n";
        let domains = read_domains(&input[..]).await.unwrap();
        let names: Vec<&str> = domains.iter().map(Domain::as_str).collect();
        assert_eq!(names, vec!["example.com", "rust-lang.org"]);
    }

    #[tokio::test]
    async fn test_collect_single_endpoint() {
        let source = InputSource::Single("https://example.com/path".to_string());
        let domains = collect_domains(&source).await.unwrap();
        assert_eq!(domains, vec![Domain::parse("example.com").unwrap()]);
    }

    #[tokio::test]
    async fn test_collect_endpoint_without_host_is_an_error() {
        for endpoint in ["", "   ", "https://", "http:///"] {
            let source = InputSource::Single(endpoint.to_string());
            match collect_domains(&source).await {
                Err(InputError::EmptyEndpoint(value)) => assert_eq!(value, endpoint),
                other => panic!("{endpoint:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_piped_domains_are_read() {
        let input = b"example.com\n# skip\nhttps://mail.example.org/\n";
        let domains = read_piped_domains(&input[..], false).await.unwrap();
        let names: Vec<&str> = domains.iter().map(Domain::as_str).collect();
        assert_eq!(names, vec!["example.com", "mail.example.org"]);
    }

    #[tokio::test]
    async fn test_interactive_stdin_is_no_input() {
        let input = b"example.com\n";
        assert!(matches!(
            read_piped_domains(&input[..], true).await,
            Err(InputError::NoInput)
        ));
    }

    /// Reader whose every read fails.
    struct BrokenPipe;

    impl tokio::io::AsyncRead for BrokenPipe {
        fn poll_read(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
            _buf: &mut tokio::io::ReadBuf<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "pipe closed",
            )))
        }
    }

    #[tokio::test]
    async fn test_stdin_read_failure_is_reported() {
        match read_piped_domains(BufReader::new(BrokenPipe), false).await {
            Err(InputError::Stdin(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected Stdin error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_collect_missing_list_file_is_an_error() {
        let source = InputSource::ListFile(PathBuf::from("/definitely/not/here.txt"));
        match collect_domains(&source).await {
            Err(InputError::ListFile { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.txt"))
            }
            other => panic!("expected ListFile error, got {other:?}"),
        }
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_sanitize_idempotent(
            host in "[a-z]{1,20}(\\.[a-z]{2,5}){1,3}",
            scheme in prop::sample::select(vec!["", "http://", "https://"]),
            path in "(/[a-z0-9]{0,10}){0,4}"
        ) {
            let endpoint = format!("{scheme}{host}{path}");
            let once = sanitize_endpoint(&endpoint);
            prop_assert_eq!(once, host.as_str());
            prop_assert_eq!(sanitize_endpoint(once), once);
        }

        #[test]
        fn test_sanitize_never_contains_slash(endpoint in "\\PC{0,80}") {
            prop_assert!(!sanitize_endpoint(&endpoint).contains('/'));
        }
    }
}
