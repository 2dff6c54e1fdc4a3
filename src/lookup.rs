//! AS lookup engine
//!
//! Orchestrates validation, query construction, DNS resolution and response
//! parsing into a single `AsData` result per address.

use crate::address::parse_address;
use crate::data::AsData;
use crate::dns::{DnsClient, DnsError, HickoryDns};
use crate::error::{Error, LookupError};
use crate::service::Service;
use hickory_resolver::TokioResolver;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default bound on a single DNS query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// AS lookup engine.
///
/// Stateless apart from its DNS client handle: every lookup is an
/// independent call, results are never cached, and instances are safe to
/// share across tasks.
///
/// # Examples
///
/// ```no_run
/// use aslookup::{AsLookup, Service};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let engine = AsLookup::new();
///
///     let data = engine.lookup("8.8.8.8", Service::Cymru).await?;
///     println!("AS{}: {}", data.asn, data.as_name);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AsLookup {
    client: Arc<dyn DnsClient>,
    timeout: Duration,
}

impl AsLookup {
    /// Create an engine with the default resolver
    pub fn new() -> Self {
        Self::with_client(Arc::new(HickoryDns::new()))
    }

    /// Create an engine around a specific DNS client
    pub fn with_client(client: Arc<dyn DnsClient>) -> Self {
        Self {
            client,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Create an engine around an existing hickory resolver handle
    pub fn with_resolver(resolver: Arc<TokioResolver>) -> Self {
        Self::with_client(Arc::new(HickoryDns::with_resolver(resolver)))
    }

    /// Set the per-query timeout.
    ///
    /// One unresponsive address must not stall a batch indefinitely, so
    /// every query is bounded by this deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Look up AS data for `address` using a service resolved by name.
    ///
    /// The service name is resolved first: an unknown name fails before the
    /// address is even validated.
    pub async fn lookup_named(&self, address: &str, service_name: &str) -> Result<AsData, Error> {
        let service = Service::from_name(service_name).map_err(Error::Lookup)?;
        self.lookup(address, service).await
    }

    /// Look up AS data for `address` using `service`.
    ///
    /// Fails with [`Error::AddressFormat`] on malformed input (before any
    /// network I/O) and with [`Error::Lookup`] for everything that can go
    /// wrong after validation.
    pub async fn lookup(&self, address: &str, service: Service) -> Result<AsData, Error> {
        let addr = parse_address(address)?;
        Ok(self.query_service(addr, service).await?)
    }

    async fn query_service(
        &self,
        addr: Ipv4Addr,
        service: Service,
    ) -> Result<AsData, LookupError> {
        let origin = service.origin_query(addr);
        debug!(service = service.name(), query = %origin, "origin lookup");

        let answers = match self.query_txt(&origin).await {
            Ok(answers) => answers,
            // The name not resolving means no service zone covers the
            // address: syntactically valid, announced by no AS
            Err(DnsError::NoAnswer(_)) => return Err(LookupError::NonRoutable { address: addr }),
            Err(source) => {
                return Err(LookupError::Transport {
                    query: origin,
                    source,
                })
            }
        };
        let payload = answers
            .first()
            .ok_or(LookupError::NonRoutable { address: addr })?;
        let record = service.parse_origin(payload)?;

        let as_name = if let Some(name) = record.as_name.clone() {
            name
        } else if let Some(query) = service.as_name_query(record.asn) {
            debug!(service = service.name(), query = %query, "AS name lookup");
            // The address demonstrably routed, so a missing AS record here
            // is a service-side fault, not non-routability
            let answers = self.query_txt(&query).await.map_err(|source| {
                LookupError::Transport {
                    query: query.clone(),
                    source,
                }
            })?;
            let payload = answers.first().ok_or_else(|| LookupError::Transport {
                query: query.clone(),
                source: DnsError::NoAnswer(query.clone()),
            })?;
            service.parse_as_name(payload)?
        } else {
            return Err(LookupError::MalformedResponse(format!(
                "{} origin answer carried no AS name",
                service.name()
            )));
        };

        Ok(AsData {
            address: addr,
            asn: record.asn,
            handle: record.handle,
            cc: record.cc,
            as_name,
            prefix: record.prefix,
        })
    }

    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match tokio::time::timeout(self.timeout, self.client.query_txt(name)).await {
            Ok(result) => result,
            Err(_) => Err(DnsError::Timeout(self.timeout)),
        }
    }
}

impl Default for AsLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up AS data for an address with a default engine.
///
/// Convenience entry point for one-off lookups; construct an [`AsLookup`] to
/// reuse a resolver across calls.
pub async fn get_as_data(address: &str, service: &str) -> Result<AsData, Error> {
    AsLookup::new().lookup_named(address, service).await
}
