//! Fire-and-forget UDP sending
//!
//! Each send opens a fresh socket on an ephemeral port, exactly like the
//! original sender roles. UDP gives no delivery guarantee, so the absence
//! of a listener on the destination port is not an error here.

use std::fmt;
use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

// ============================================================================
// Errors
// ============================================================================

/// Errors while sending a single datagram
#[derive(Debug)]
pub enum SendError {
    /// Could not open an ephemeral send socket
    Bind(io::Error),
    /// The send call failed
    Send(io::Error),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Bind(e) => write!(f, "could not open send socket: {}", e),
            SendError::Send(e) => write!(f, "send failed: {}", e),
        }
    }
}

impl std::error::Error for SendError {}

// ============================================================================
// Sending
// ============================================================================

/// Send one datagram to `dest` from a freshly bound ephemeral port.
///
/// Returns the number of bytes handed to the socket.
pub fn send_to(payload: &[u8], dest: SocketAddr) -> Result<usize, SendError> {
    let socket =
        UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(SendError::Bind)?;
    let sent = socket.send_to(payload, dest).map_err(SendError::Send)?;

    log::debug!("sent {} bytes to {}", sent, dest);
    Ok(sent)
}

// ============================================================================
// Tests
// ============================================================================
