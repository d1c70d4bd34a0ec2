//! Standard name resolution
//!
//! Wraps the standard library's address lookup. Resolution failures come
//! back as a value the caller can match on; callers that only want the
//! original "Unknown host" behavior print that on any `Err`.

use std::fmt;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};

// ============================================================================
// Errors
// ============================================================================

/// Errors while resolving a hostname
#[derive(Debug)]
pub enum ResolveError {
    /// The system resolver rejected or could not resolve the name
    Lookup(io::Error),
    /// The lookup succeeded but produced no addresses
    NoAddresses,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Lookup(e) => write!(f, "lookup failed: {}", e),
            ResolveError::NoAddresses => write!(f, "lookup returned no addresses"),
        }
    }
}

impl std::error::Error for ResolveError {}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve a hostname to its first address.
///
/// Accepts names (`"localhost"`, `"www.google.com"`) as well as IP
/// literals, which pass through unchanged.
pub fn resolve_host(name: &str) -> Result<IpAddr, ResolveError> {
    // The port takes no part in the lookup; any value works
    let mut addrs = (name, 0u16)
        .to_socket_addrs()
        .map_err(ResolveError::Lookup)?;

    addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or(ResolveError::NoAddresses)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_localhost_is_loopback() {
        let addr = resolve_host("localhost").unwrap();
        assert!(addr.is_loopback());
    }

    #[test]
    fn test_resolve_ipv4_literal_passes_through() {
        let addr = resolve_host("127.0.0.1").unwrap();
        assert_eq!(addr, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        // Reserved TLD; must never resolve
        assert!(resolve_host("no-such-host.invalid").is_err());
    }

    #[test]
    fn test_resolve_empty_name_fails() {
        assert!(resolve_host("").is_err());
    }
}
