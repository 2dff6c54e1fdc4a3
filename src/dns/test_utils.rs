//! Test utilities for the DNS boundary

use super::{DnsClient, DnsError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted DNS responder for engine tests.
///
/// Answers come from a fixed table; names without an entry behave like
/// NXDOMAIN. Every call is counted so tests can assert that a given code
/// path issued no queries at all.
#[derive(Debug, Default)]
pub struct MockDnsClient {
    answers: HashMap<String, Vec<String>>,
    failures: HashSet<String>,
    delay: Option<Duration>,
    queries: AtomicUsize,
}

impl MockDnsClient {
    /// Create a responder with no scripted answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the TXT answer for a query name
    pub fn answer(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    /// Script a resolver-level failure for a query name
    pub fn fail(mut self, name: &str) -> Self {
        self.failures.insert(name.to_string());
        self
    }

    /// Delay every answer, for timeout tests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of queries issued so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failures.contains(name) {
            return Err(DnsError::Resolution("SERVFAIL".to_string()));
        }
        match self.answers.get(name) {
            Some(records) => Ok(records.clone()),
            None => Err(DnsError::NoAnswer(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_every_query() {
        let mock = MockDnsClient::new().answer("a.example", &["x"]);
        assert_eq!(mock.query_count(), 0);

        let _ = mock.query_txt("a.example").await;
        let _ = mock.query_txt("b.example").await;
        assert_eq!(mock.query_count(), 2);
    }

    #[tokio::test]
    async fn unscripted_names_get_no_answer() {
        let mock = MockDnsClient::new();
        let err = mock.query_txt("missing.example").await.unwrap_err();
        assert!(matches!(err, DnsError::NoAnswer(name) if name == "missing.example"));
    }

    #[tokio::test]
    async fn scripted_failures_are_resolution_errors() {
        let mock = MockDnsClient::new().fail("broken.example");
        let err = mock.query_txt("broken.example").await.unwrap_err();
        assert!(matches!(err, DnsError::Resolution(_)));
    }
}
