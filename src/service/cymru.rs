//! Team Cymru IP-to-ASN lookup convention
//!
//! Two TXT queries per lookup. The origin query, keyed by the reversed
//! address, yields `ASN | prefix | country | registry | allocated`, e.g.
//! `"15169 | 8.8.8.0/24 | US | arin | 2000-03-30"`. The AS query, keyed by
//! the AS number from the first answer, yields
//! `ASN | country | registry | allocated | AS name`; only the name field is
//! consumed from it.

use super::OriginRecord;
use crate::error::LookupError;
use std::net::Ipv4Addr;

/// Registered service name
pub const NAME: &str = "cymru";

/// Zone answering origin queries
const ORIGIN_ZONE: &str = "origin.asn.cymru.com";

/// Zone answering AS name queries
const AS_ZONE: &str = "asn.cymru.com";

/// Fields in an origin answer
const ORIGIN_ARITY: usize = 5;

/// Fields in an AS name answer
const AS_ARITY: usize = 5;

/// Origin query name: octets reversed under the origin zone
pub fn origin_query(addr: Ipv4Addr) -> String {
    let o = addr.octets();
    format!("{}.{}.{}.{}.{}", o[3], o[2], o[1], o[0], ORIGIN_ZONE)
}

/// AS name query, parameterized by the ASN from the origin answer
pub fn as_name_query(asn: u32) -> String {
    format!("AS{}.{}", asn, AS_ZONE)
}

/// Parse an origin answer; the AS name arrives in the second phase
pub fn parse_origin(payload: &str) -> Result<OriginRecord, LookupError> {
    let fields = super::split_record(payload, ORIGIN_ARITY, NAME)?;
    Ok(OriginRecord {
        asn: super::parse_asn(fields[0])?,
        prefix: super::parse_prefix(fields[1])?,
        cc: fields[2].to_string(),
        // Registry mnemonics arrive lowercase ("arin"); handles are
        // conventionally uppercase
        handle: fields[3].to_ascii_uppercase(),
        as_name: None,
    })
}

/// Extract the AS name from an AS record answer
pub fn parse_as_name(payload: &str) -> Result<String, LookupError> {
    let fields = super::split_record(payload, AS_ARITY, NAME)?;
    Ok(fields[4].to_string())
}
