//! Result record for AS lookups

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// AS information for a single queried address.
///
/// Constructed only by the lookup engine once every field is known; a failed
/// lookup never yields a partially filled record. The record is immutable
/// after construction and independent of any other lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsData {
    /// The address the lookup was performed for
    pub address: Ipv4Addr,
    /// Number of the announcing AS
    pub asn: u32,
    /// Short registry handle for the AS
    pub handle: String,
    /// ISO country code of the AS registration
    pub cc: String,
    /// Full AS organization name
    pub as_name: String,
    /// BGP prefix the address was matched under
    pub prefix: String,
}

impl fmt::Display for AsData {
    /// Diagnostic representation enumerating every field by name
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AsData(address={}, asn={}, handle={}, cc={}, as_name={}, prefix={})",
            self.address, self.asn, self.handle, self.cc, self.as_name, self.prefix
        )
    }
}
