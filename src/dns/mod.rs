//! DNS resolver boundary for TXT lookups

pub mod hickory;

#[cfg(test)]
pub mod test_utils;

pub use hickory::{create_default_resolver, HickoryDns};

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Error type for TXT query operations
#[derive(Debug, Error)]
pub enum DnsError {
    /// The query name does not exist or carries no TXT records
    #[error("no TXT records for {0}")]
    NoAnswer(String),

    /// The query did not complete within the allowed time
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Resolution(String),
}

/// A DNS client capable of TXT lookups.
///
/// The lookup engine issues every query through this trait, so callers can
/// inject their own resolver and tests can substitute a scripted responder.
#[async_trait]
pub trait DnsClient: fmt::Debug + Send + Sync {
    /// Fetch the TXT records for `name`, one string per record with the
    /// record's character-string segments joined.
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError>;
}
