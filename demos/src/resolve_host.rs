//! DNS demo: resolve hostnames from standard input
//!
//! Reads one hostname per line until end of input and prints the resolved
//! address, or the literal `Unknown host` when resolution fails. A failed
//! line does not stop the loop.

use std::error::Error;
use std::io::{self, BufRead, Write};

use datagram_transport::resolve_host;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", resolve_line(line.trim()))?;
    }

    Ok(())
}

/// One line of the demo's output: the address literal or `Unknown host`
fn resolve_line(name: &str) -> String {
    match resolve_host(name) {
        Ok(addr) => addr.to_string(),
        Err(e) => {
            log::debug!("resolution failed for '{}': {}", name, e);
            "Unknown host".to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use super::*;

    #[test]
    fn test_resolved_line_is_an_address_literal() {
        let line = resolve_line("localhost");
        let addr: IpAddr = line.parse().unwrap();
        assert!(addr.is_loopback());
    }

    #[test]
    fn test_unresolvable_line_is_the_unknown_host_literal() {
        assert_eq!(resolve_line("no-such-host.invalid"), "Unknown host");
    }

    #[test]
    fn test_literal_addresses_pass_through() {
        assert_eq!(resolve_line("127.0.0.1"), "127.0.0.1");
    }
}
