//! Shared networking pieces for the teaching binaries
//!
//! This crate holds everything the echo pair and the standalone demos have
//! in common:
//! - The well-known loopback endpoints used by the echo client and server
//! - `Datagram`: one received UDP message plus its sender
//! - `Receiver`: bind a port, signal readiness, perform exactly one receive
//! - Fire-and-forget sending and standard name resolution

pub mod receiver;
pub mod resolve;
pub mod sender;

pub use receiver::{Readiness, Receiver, RecvError};
pub use resolve::{resolve_host, ResolveError};
pub use sender::{send_to, SendError};

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// ============================================================================
// Well-Known Endpoints
// ============================================================================

/// Port where the echo server listens for requests
pub const SERVER_PORT: u16 = 1024;

/// Port where the echo client listens for the server's response
pub const CLIENT_PORT: u16 = 1025;

/// Default receive buffer capacity (2000 bytes)
pub const DEFAULT_BUF_LEN: usize = 2000;

/// Loopback host every program in the suite talks to
pub const LOCAL_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Build a loopback endpoint for the given port
pub fn local_endpoint(port: u16) -> SocketAddr {
    SocketAddr::new(LOCAL_HOST, port)
}

// ============================================================================
// Datagram
// ============================================================================

/// One received UDP message.
///
/// The payload holds the bytes actually reported by the receive call, not
/// the full receive buffer, so there is no trailing padding to strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    /// Payload bytes, trimmed to the length reported by the socket
    pub payload: Vec<u8>,
    /// Address the datagram arrived from
    pub peer: SocketAddr,
}

impl Datagram {
    /// Lossy UTF-8 view of the payload
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

// ============================================================================
// Tests
// ============================================================================
