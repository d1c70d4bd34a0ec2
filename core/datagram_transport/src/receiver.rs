//! Single-shot UDP receiver with a bind-readiness gate
//!
//! The receiver binds a UDP socket to a fixed port, opens its bind gate the
//! moment the socket is registered for readiness, then performs exactly one
//! receive. A `Readiness` handle taken before the receiver moves to another
//! thread lets the sending side wait for the bind instead of polling a flag
//! on a timer.
//!
//! # Lifecycle
//!
//! ```text
//! Unbound → Bound (gate opens) → Received (handle spent)
//! ```
//!
//! `receive` consumes the receiver, so a spent handle cannot be reused.

use std::fmt;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Condvar, Mutex};

use mio::net::UdpSocket;
use mio::{Events, Interest, Poll, Token};

use crate::{Datagram, DEFAULT_BUF_LEN};

/// mio token for the receive socket
const RECV_TOKEN: Token = Token(0);

// ============================================================================
// Errors
// ============================================================================

/// Errors while binding or receiving.
///
/// Failures carry the underlying `io::Error` so callers can branch on the
/// kind (an interrupted receive shows up as `Recv` with
/// `io::ErrorKind::Interrupted`); they are never folded into the payload.
#[derive(Debug)]
pub enum RecvError {
    /// Could not bind the local port
    Bind(io::Error),
    /// Readiness polling failed
    Poll(io::Error),
    /// The receive call itself failed
    Recv(io::Error),
}

impl fmt::Display for RecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecvError::Bind(e) => write!(f, "bind failed: {}", e),
            RecvError::Poll(e) => write!(f, "readiness poll failed: {}", e),
            RecvError::Recv(e) => write!(f, "receive failed: {}", e),
        }
    }
}

impl std::error::Error for RecvError {}

// ============================================================================
// Bind Gate
// ============================================================================

/// One-way latch flipped when the receive socket is ready.
///
/// The flag only ever goes false → true.
#[derive(Debug)]
struct BindGate {
    bound: Mutex<bool>,
    cond: Condvar,
}

impl BindGate {
    fn new() -> Self {
        BindGate {
            bound: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    fn open(&self) {
        let mut bound = self
            .bound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *bound = true;
        self.cond.notify_all();
    }

    fn is_open(&self) -> bool {
        *self
            .bound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn wait_open(&self) {
        let mut bound = self
            .bound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        while !*bound {
            bound = self
                .cond
                .wait(bound)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }
}

// ============================================================================
// Readiness Handle
// ============================================================================

/// Cloneable view of a receiver's bind state.
///
/// Stays valid after the receiver itself has been consumed; once `is_bound`
/// reports true it never reverts.
#[derive(Debug, Clone)]
pub struct Readiness {
    gate: Arc<BindGate>,
}

impl Readiness {
    /// True once the receive socket has acquired its port
    pub fn is_bound(&self) -> bool {
        self.gate.is_open()
    }

    /// Block until the receive socket has acquired its port
    pub fn wait_bound(&self) {
        self.gate.wait_open();
    }
}

// ============================================================================
// Receiver
// ============================================================================

/// Binds a UDP port and performs exactly one blocking receive.
pub struct Receiver {
    port: u16,
    capacity: usize,
    gate: Arc<BindGate>,
}

impl Receiver {
    /// Receiver with the default buffer capacity
    pub fn new(port: u16) -> Self {
        Self::with_capacity(port, DEFAULT_BUF_LEN)
    }

    /// Receiver with an explicit maximum payload size
    pub fn with_capacity(port: u16, capacity: usize) -> Self {
        Receiver {
            port,
            capacity,
            gate: Arc::new(BindGate::new()),
        }
    }

    /// The port this receiver will bind
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle for observing bind readiness from another thread
    pub fn readiness(&self) -> Readiness {
        Readiness {
            gate: self.gate.clone(),
        }
    }

    /// Bind the port, open the bind gate, and wait for one datagram.
    ///
    /// Blocks with no timeout until a datagram arrives. The returned
    /// payload is trimmed to the byte count reported by the socket, so a
    /// datagram larger than the configured capacity comes back truncated
    /// to the capacity.
    pub fn receive(self) -> Result<Datagram, RecvError> {
        // All interfaces, same as the original receiver roles
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port));
        let mut socket = UdpSocket::bind(addr).map_err(RecvError::Bind)?;

        let mut poll = Poll::new().map_err(RecvError::Poll)?;
        poll.registry()
            .register(&mut socket, RECV_TOKEN, Interest::READABLE)
            .map_err(RecvError::Poll)?;

        // The port is ours and the socket is watched; senders may proceed
        self.gate.open();
        log::debug!("listening on {}", addr);

        let mut events = Events::with_capacity(4);
        let mut buf = vec![0u8; self.capacity];

        loop {
            poll.poll(&mut events, None).map_err(RecvError::Poll)?;

            match socket.recv_from(&mut buf) {
                Ok((len, peer)) => {
                    log::debug!("received {} bytes from {}", len, peer);
                    buf.truncate(len);
                    return Ok(Datagram { payload: buf, peer });
                }
                // Spurious wakeup; poll again
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                Err(e) => return Err(RecvError::Recv(e)),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
