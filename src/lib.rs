//! aslookup - map IPv4 addresses to the autonomous system announcing them
//!
//! This library resolves an IPv4 address to AS attribution data (AS number,
//! registry handle, country code and organization name) by querying one of
//! the public DNS-based lookup services: Shadowserver or Team Cymru.
//!
//! The engine is stateless and purely synchronous per call: validate the
//! address, build the service's reverse-lookup TXT query, resolve it, parse
//! the answer. Failures are classified so callers can tell malformed input
//! from non-routable addresses and from transport problems.

pub mod address;
pub mod data;
pub mod dns;
pub mod error;
pub mod lookup;
pub mod service;

// Re-export core types for library users
pub use data::AsData;
pub use error::{AddressFormatError, Error, LookupError};
pub use lookup::{get_as_data, AsLookup, DEFAULT_QUERY_TIMEOUT};
pub use service::Service;
