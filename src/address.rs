//! IPv4 address validation

use crate::error::AddressFormatError;
use std::net::Ipv4Addr;

/// Parse a candidate IPv4 address into its structured form.
///
/// Accepts exactly four dot-separated decimal octets, each representable as
/// an unsigned byte. The caller is expected to have trimmed surrounding
/// whitespace already; anything else, including IPv6 literals and hostnames,
/// is rejected. Validation is purely local and never touches the network.
pub fn parse_address(raw: &str) -> Result<Ipv4Addr, AddressFormatError> {
    let invalid = || AddressFormatError {
        address: raw.to_string(),
    };

    let mut octets = [0u8; 4];
    let mut parts = raw.split('.');
    for slot in &mut octets {
        let part = parts.next().ok_or_else(invalid)?;
        // Reject signs, whitespace and empty octets that u8::from_str would
        // otherwise tolerate or mis-report
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse::<u8>().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}
