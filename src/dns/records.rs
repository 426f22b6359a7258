//! TXT record queries through `hickory-resolver`.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::TokioAsyncResolver;

use super::{LookupError, TxtResolver};

/// Queries TXT records for a name.
///
/// # Arguments
///
/// * `name` - The fully built query name (e.g. `_dmarc.example.com`)
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings. Multi-string TXT payloads are joined.
///
/// # Errors
///
/// `LookupError::NoRecords` for NXDOMAIN or an empty answer,
/// `LookupError::Failed` for timeouts and other resolver failures.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.txt_lookup(name).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .map(|txt| {
                    // TXT records can contain multiple strings - join them
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join("")
                })
                .collect();
            if txt_records.is_empty() {
                return Err(LookupError::NoRecords {
                    name: name.to_string(),
                });
            }
            Ok(txt_records)
        }
        Err(e) => match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => {
                log::debug!("No TXT records for {name}");
                Err(LookupError::NoRecords {
                    name: name.to_string(),
                })
            }
            _ => {
                let message = e.to_string();
                if message.contains("timeout") || message.contains("timed out") {
                    log::warn!("TXT record lookup timed out for {name}: {e}");
                } else {
                    log::warn!("Failed to lookup TXT records for {name}: {e}");
                }
                Err(LookupError::Failed {
                    name: name.to_string(),
                    message,
                })
            }
        },
    }
}

/// [`TxtResolver`] backed by a shared hickory resolver.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryTxtResolver {
    /// Wraps a resolver built by `init_resolver`.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(name, &self.resolver).await
    }
}
