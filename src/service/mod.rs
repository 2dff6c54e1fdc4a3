//! Lookup service registry
//!
//! Each registered service describes how to build its reverse-lookup DNS
//! queries and how to parse its TXT answers. The engine drives lookups
//! through this descriptor and never branches on service identity, so adding
//! a service means adding one variant and one strategy module.

pub mod cymru;
pub mod shadowserver;

use crate::error::LookupError;
use ipnet::Ipv4Net;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// The set of supported lookup services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Shadowserver IP-to-BGP service (single query)
    Shadowserver,
    /// Team Cymru IP-to-ASN service (origin query plus AS name query)
    Cymru,
}

/// Partially assembled AS record from a service's origin answer.
///
/// `as_name` is `None` when the service needs a second query to supply it;
/// the engine turns the record into an `AsData` only once the name is known,
/// so a half-merged record never reaches a caller.
#[derive(Debug, Clone)]
pub struct OriginRecord {
    /// Number of the announcing AS
    pub asn: u32,
    /// Matched BGP prefix
    pub prefix: String,
    /// Short registry handle
    pub handle: String,
    /// ISO country code
    pub cc: String,
    /// Full AS name, when the origin answer already carries it
    pub as_name: Option<String>,
}

impl Service {
    /// Resolve a service by its registered name.
    ///
    /// Unknown names fail before any address validation or DNS traffic.
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match name {
            shadowserver::NAME => Ok(Self::Shadowserver),
            cymru::NAME => Ok(Self::Cymru),
            other => Err(LookupError::UnknownService(other.to_string())),
        }
    }

    /// Registered name of this service
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shadowserver => shadowserver::NAME,
            Self::Cymru => cymru::NAME,
        }
    }

    /// DNS query name for the origin (address-keyed) phase
    pub fn origin_query(&self, addr: Ipv4Addr) -> String {
        match self {
            Self::Shadowserver => shadowserver::origin_query(addr),
            Self::Cymru => cymru::origin_query(addr),
        }
    }

    /// DNS query name for the AS-name phase, when this service has one.
    ///
    /// `None` means the origin answer already carries the full AS name and
    /// the lookup completes after a single query.
    pub fn as_name_query(&self, asn: u32) -> Option<String> {
        match self {
            Self::Shadowserver => None,
            Self::Cymru => Some(cymru::as_name_query(asn)),
        }
    }

    /// Parse the TXT payload of the origin phase
    pub fn parse_origin(&self, payload: &str) -> Result<OriginRecord, LookupError> {
        match self {
            Self::Shadowserver => shadowserver::parse_origin(payload),
            Self::Cymru => cymru::parse_origin(payload),
        }
    }

    /// Parse the TXT payload of the AS-name phase
    pub fn parse_as_name(&self, payload: &str) -> Result<String, LookupError> {
        match self {
            Self::Shadowserver => Err(LookupError::MalformedResponse(
                "shadowserver lookups have no AS name phase".to_string(),
            )),
            Self::Cymru => cymru::parse_as_name(payload),
        }
    }
}

impl FromStr for Service {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a pipe-delimited TXT payload into trimmed fields, enforcing the
/// service's expected arity
pub(crate) fn split_record<'a>(
    payload: &'a str,
    arity: usize,
    service: &str,
) -> Result<Vec<&'a str>, LookupError> {
    let fields: Vec<&str> = payload.split('|').map(str::trim).collect();
    if fields.len() != arity {
        return Err(LookupError::MalformedResponse(format!(
            "{} record has {} fields, expected {}: {:?}",
            service,
            fields.len(),
            arity,
            payload
        )));
    }
    Ok(fields)
}

/// Parse an AS number field.
///
/// Multi-origin answers list several AS numbers space-separated; the first
/// one wins.
pub(crate) fn parse_asn(field: &str) -> Result<u32, LookupError> {
    field
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| {
            LookupError::MalformedResponse(format!("unparsable AS number: {:?}", field))
        })
}

/// Validate a BGP prefix field
pub(crate) fn parse_prefix(field: &str) -> Result<String, LookupError> {
    field
        .parse::<Ipv4Net>()
        .map(|net| net.to_string())
        .map_err(|_| LookupError::MalformedResponse(format!("unparsable prefix: {:?}", field)))
}
