//! TXT lookups over hickory-resolver

use super::{DnsClient, DnsError};
use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::sync::Arc;
use tracing::debug;

/// DNS client backed by a shared `TokioResolver`.
///
/// The handle may be reused across any number of lookups; reuse is a
/// performance optimization, not a correctness requirement.
#[derive(Clone, Debug)]
pub struct HickoryDns {
    resolver: Arc<TokioResolver>,
}

impl HickoryDns {
    /// Create a client with the default resolver configuration
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(create_default_resolver()),
        }
    }

    /// Create a client around an existing resolver handle
    pub fn with_resolver(resolver: Arc<TokioResolver>) -> Self {
        Self { resolver }
    }
}

impl Default for HickoryDns {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsClient for HickoryDns {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let lookup = self
            .resolver
            .txt_lookup(name.to_string())
            .await
            .map_err(|e| {
                // hickory folds NXDOMAIN and NODATA into its error type; the
                // distinction from transport failures only survives in the
                // rendered message
                let msg = e.to_string();
                if msg.contains("no records found") || msg.contains("NXDomain") {
                    DnsError::NoAnswer(name.to_string())
                } else {
                    DnsError::Resolution(msg)
                }
            })?;

        let records: Vec<String> = lookup
            .iter()
            .map(|record| {
                record
                    .iter()
                    .map(|data| String::from_utf8_lossy(data))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect();

        if records.is_empty() {
            return Err(DnsError::NoAnswer(name.to_string()));
        }

        debug!(query = name, answers = records.len(), "TXT lookup complete");
        Ok(records)
    }
}

/// Create a DNS resolver with the default upstream configuration
pub fn create_default_resolver() -> TokioResolver {
    TokioResolver::builder_with_config(
        ResolverConfig::cloudflare(),
        TokioConnectionProvider::default(),
    )
    .build()
}
