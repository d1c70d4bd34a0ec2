//! UDP Echo Server
//!
//! Waits for exactly one datagram on the server port, then sends the
//! identical bytes to the client port on the local host using a fresh send
//! socket. Terminates after one echo; continuous serving is out of scope,
//! so there is no loop, no multi-client handling, and no shutdown signal.

use std::error::Error;

use datagram_transport::{local_endpoint, send_to, Datagram, Receiver, CLIENT_PORT, SERVER_PORT};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    // --server-port <port>  port to listen on (default 1024)
    // --client-port <port>  port the response is sent to (default 1025)
    let server_port = parse_port(&args, "--server-port", SERVER_PORT)?;
    let client_port = parse_port(&args, "--client-port", CLIENT_PORT)?;

    let request = run(Receiver::new(server_port), client_port)?;
    println!("RECEIVED: '{}'", request.text());

    Ok(())
}

/// Receive one datagram and echo it to `client_port`.
fn run(receiver: Receiver, client_port: u16) -> Result<Datagram, Box<dyn Error>> {
    log::info!("echo server listening on port {}", receiver.port());

    let request = receiver.receive()?;
    log::info!(
        "received {} bytes from {}",
        request.payload.len(),
        request.peer
    );

    send_to(&request.payload, local_endpoint(client_port))?;
    log::info!("echoed {} bytes to port {}", request.payload.len(), client_port);

    Ok(request)
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

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_single_shot_echo() {
        let server_port = 42141;
        let client_port = 42142;

        // Stand-in for the echo client's response listener
        let reply_rx = Receiver::new(client_port);
        let reply_ready = reply_rx.readiness();
        let reply = thread::spawn(move || reply_rx.receive());
        reply_ready.wait_bound();

        let server_rx = Receiver::new(server_port);
        let server_ready = server_rx.readiness();
        let server = thread::spawn(move || run(server_rx, client_port).unwrap());

        server_ready.wait_bound();
        send_to(b"Hello, World!", local_endpoint(server_port)).unwrap();

        let request = server.join().unwrap();
        assert_eq!(request.payload, b"Hello, World!");

        // The echoed bytes arrive on the client port unchanged
        let echoed = reply.join().unwrap().unwrap();
        assert_eq!(echoed.payload, b"Hello, World!");
    }

    #[test]
    fn test_parse_port_default_and_override() {
        let args = vec![
            "echo-server".to_string(),
            "--server-port".to_string(),
            "42150".to_string(),
        ];
        assert_eq!(parse_port(&args, "--server-port", SERVER_PORT).unwrap(), 42150);
        assert_eq!(parse_port(&args, "--client-port", CLIENT_PORT).unwrap(), 1025);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let args = vec![
            "echo-server".to_string(),
            "--server-port".to_string(),
            "not-a-port".to_string(),
        ];
        assert!(parse_port(&args, "--server-port", SERVER_PORT).is_err());
    }
}
