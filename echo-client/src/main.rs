//! UDP Echo Client
//!
//! Sends one message to the echo server and prints the echoed response.
//!
//! The response listener runs on its own thread and must hold its port
//! before the request goes out; otherwise a fast echo could arrive while
//! nothing is listening and be dropped. The client therefore waits on the
//! listener's bind gate, sends, and then blocks on the listener thread for
//! the response. There is no timeout on that final wait.

use std::error::Error;
use std::thread;

use datagram_transport::{local_endpoint, send_to, Datagram, Receiver, CLIENT_PORT, SERVER_PORT};

/// Default message sent to the echo server
const MESSAGE: &str = "Hello, World!";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    // --server-port <port>  where the echo server listens (default 1024)
    // --client-port <port>  where the response listener binds (default 1025)
    // --message <text>      request payload (default "Hello, World!")
    let server_port = parse_port(&args, "--server-port", SERVER_PORT)?;
    let client_port = parse_port(&args, "--client-port", CLIENT_PORT)?;
    let message = parse_arg(&args, "--message").unwrap_or_else(|| MESSAGE.to_string());

    let response = run(server_port, client_port, &message)?;
    println!("SENT: '{}' RECEIVED: '{}'", message, response.text());

    Ok(())
}

/// Send `message` to the server and wait for the echoed response.
fn run(server_port: u16, client_port: u16, message: &str) -> Result<Datagram, Box<dyn Error>> {
    let receiver = Receiver::new(client_port);
    let ready = receiver.readiness();

    // Listen for the response before the request goes out
    let response = thread::spawn(move || receiver.receive());

    log::info!("waiting for response listener on port {}", client_port);
    ready.wait_bound();
    log::info!("listener bound; sending '{}'", message);

    send_to(message.as_bytes(), local_endpoint(server_port))?;

    // Blocks until the server answers; there is no timeout
    let datagram = response
        .join()
        .map_err(|_| "response listener panicked")??;
    log::info!(
        "received {} bytes from {}",
        datagram.payload.len(),
        datagram.peer
    );

    Ok(datagram)
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_port(args: &[String], flag: &str, default: u16) -> Result<u16, Box<dyn Error>> {
    match parse_arg(args, flag) {
        Some(value) => value
            .parse()
            .map_err(|_| format!("invalid port for {}", flag).into()),
        None => Ok(default),
    }
}

// ============================================================================
// Tests
// ============================================================================
