//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Resolver options used for every scan.
///
/// Short timeouts and few attempts keep a dead name server from stalling a
/// worker; `ndots = 0` stops search domains being appended to query names.
pub fn resolver_options() -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;
    opts
}

/// Initializes the DNS resolver for TXT lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent). If that cannot be read, falls back to hickory's default
/// upstream servers.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
///
/// # Errors
///
/// Reserved for resolver setup failures; the fallback configuration itself
/// does not fail.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let config = match read_system_conf() {
        Ok((config, _system_opts)) => config,
        Err(e) => {
            log::warn!("Could not read system DNS configuration ({e}), using default resolvers");
            ResolverConfig::default()
        }
    };

    if config.name_servers().is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no name servers configured".to_string(),
        ));
    }

    Ok(Arc::new(TokioAsyncResolver::tokio(
        config,
        resolver_options(),
    )))
}
