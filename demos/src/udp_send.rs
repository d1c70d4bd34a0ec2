//! UDP demo: fire-and-forget send
//!
//! Sends one datagram to the well-known port on the local host and exits.
//! Delivery is not confirmed; start `udp-recv` first to see the message
//! arrive.

use std::error::Error;

use datagram_transport::{local_endpoint, send_to, SERVER_PORT};

/// The message sent to the local receiver
const MESSAGE: &str = "Hello, World!";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    // --port <port>  destination port (default 1024)
    let port = match parse_arg(&args, "--port") {
        Some(value) => value.parse().map_err(|_| "invalid port for --port")?,
        None => SERVER_PORT,
    };

    send_to(MESSAGE.as_bytes(), local_endpoint(port))?;
    println!("SENT: '{}'", MESSAGE);

    Ok(())
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
