//! Shadowserver IP-to-BGP lookup convention
//!
//! A single TXT query keyed by the reversed address returns the complete
//! record: `ASN | prefix | handle | country | domain | AS name`, e.g.
//! `"15169 | 8.8.8.0/24 | GOOGLE | US | google.com | Google LLC"`.

use super::OriginRecord;
use crate::error::LookupError;
use std::net::Ipv4Addr;

/// Registered service name
pub const NAME: &str = "shadowserver";

/// Zone answering origin queries
const ORIGIN_ZONE: &str = "origin.asn.shadowserver.org";

/// Fields in an origin answer
const ORIGIN_ARITY: usize = 6;

/// Origin query name: octets reversed under the origin zone
pub fn origin_query(addr: Ipv4Addr) -> String {
    let o = addr.octets();
    format!("{}.{}.{}.{}.{}", o[3], o[2], o[1], o[0], ORIGIN_ZONE)
}

/// Parse an origin answer into a complete record
pub fn parse_origin(payload: &str) -> Result<OriginRecord, LookupError> {
    let fields = super::split_record(payload, ORIGIN_ARITY, NAME)?;
    Ok(OriginRecord {
        asn: super::parse_asn(fields[0])?,
        prefix: super::parse_prefix(fields[1])?,
        handle: fields[2].to_string(),
        cc: fields[3].to_string(),
        as_name: Some(fields[5].to_string()),
    })
}
