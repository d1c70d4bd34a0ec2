//! TCP demo: fetch the front page of a web server
//!
//! Connects to the host on port 80, writes a literal HTTP/1.1 GET request,
//! and prints the response line by line until the peer closes the
//! connection. With a keep-alive peer that can take a while; the original
//! behaves the same way.

use std::error::Error;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

/// Default host to fetch
const DEFAULT_HOST: &str = "www.google.com";

/// Standard HTTP port
const HTTP_PORT: u16 = 80;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    // --host <name>  server to fetch from (default www.google.com)
    let host = parse_arg(&args, "--host").unwrap_or_else(|| DEFAULT_HOST.to_string());

    log::info!("connecting to {}:{}", host, HTTP_PORT);
    let mut stream = TcpStream::connect((host.as_str(), HTTP_PORT))?;

    stream.write_all(build_request(&host).as_bytes())?;
    stream.flush()?;

    // Read until the peer closes the connection
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        println!("{}", line?);
    }

    Ok(())
}

/// The literal HTTP/1.1 request for the root path
fn build_request(host: &str) -> String {
    format!("GET / HTTP/1.1\r\nHost: {}\r\n\r\n", host)
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_the_literal_get() {
        assert_eq!(
            build_request("www.google.com"),
            "GET / HTTP/1.1\r\nHost: www.google.com\r\n\r\n"
        );
    }

    #[test]
    fn test_host_flag_overrides_default() {
        let args = vec![
            "tcp-get".to_string(),
            "--host".to_string(),
            "example.org".to_string(),
        ];
        assert_eq!(parse_arg(&args, "--host").unwrap(), "example.org");
    }
}
