//! UDP demo: single blocking receive
//!
//! Binds the well-known port, waits for one datagram, prints it, and
//! exits. Run this before `udp-send`.

use std::error::Error;

use datagram_transport::{Receiver, DEFAULT_BUF_LEN, SERVER_PORT};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    // --port <port>       port to listen on (default 1024)
    // --capacity <bytes>  maximum payload size (default 2000)
    let port = match parse_arg(&args, "--port") {
        Some(value) => value.parse().map_err(|_| "invalid port for --port")?,
        None => SERVER_PORT,
    };
    let capacity = match parse_arg(&args, "--capacity") {
        Some(value) => value.parse().map_err(|_| "invalid size for --capacity")?,
        None => DEFAULT_BUF_LEN,
    };

    log::info!("waiting for a datagram on port {}", port);
    let datagram = Receiver::with_capacity(port, capacity).receive()?;

    println!("RECEIVED: '{}'", datagram.text());

    Ok(())
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
