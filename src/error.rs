//! Error types for AS lookup operations

use crate::dns::DnsError;
use std::net::Ipv4Addr;
use thiserror::Error;

/// The input string is not a syntactically valid IPv4 address.
///
/// Raised locally, before any DNS traffic. Carries the offending input so
/// callers can report it alongside the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid IPv4 address: {address:?}")]
pub struct AddressFormatError {
    /// The input that failed validation
    pub address: String,
}

/// Errors that can occur once a syntactically valid address is queried
#[derive(Debug, Error)]
pub enum LookupError {
    /// The address is valid but no AS currently announces it
    #[error("{address} is not announced by any AS")]
    NonRoutable {
        /// The queried address
        address: Ipv4Addr,
    },

    /// The resolver failed to produce an answer (timeout, network error,
    /// server failure)
    #[error("DNS transport failure for {query}: {source}")]
    Transport {
        /// The DNS query name that failed
        query: String,
        /// The underlying resolver failure
        #[source]
        source: DnsError,
    },

    /// The service answered but the payload does not fit its expected shape
    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    /// The requested service name is not registered
    #[error("unknown lookup service: {0:?}")]
    UnknownService(String),
}

/// Top-level error returned by the lookup engine.
///
/// Callers are expected to match on the variants (and on the `LookupError`
/// kind within), never on message text.
#[derive(Debug, Error)]
pub enum Error {
    /// The address failed validation; no query was issued
    #[error(transparent)]
    AddressFormat(#[from] AddressFormatError),

    /// The lookup failed after validation
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
