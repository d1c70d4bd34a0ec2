//! End-to-end exercises over real loopback sockets
//!
//! These mirror how the echo binaries use the library: a listener bound
//! first, a sender gated on the listener's bind, and one datagram each way.

use std::thread;

use datagram_transport::{local_endpoint, send_to, Receiver};

#[test]
fn test_receiver_gets_exact_message() {
    let port = 42131;
    let receiver = Receiver::new(port);
    let ready = receiver.readiness();
    let handle = thread::spawn(move || receiver.receive());

    ready.wait_bound();
    send_to(b"Hello, World!", local_endpoint(port)).unwrap();

    let datagram = handle.join().unwrap().unwrap();
    assert_eq!(datagram.text(), "Hello, World!");
}

#[test]
fn test_echo_pair_round_trip() {
    let server_port = 42132;
    let client_port = 42133;

    // Server role: one receive, then echo the exact bytes to the client port
    let server_rx = Receiver::new(server_port);
    let server_ready = server_rx.readiness();
    let server = thread::spawn(move || {
        let request = server_rx.receive().unwrap();
        send_to(&request.payload, local_endpoint(client_port)).unwrap();
        request
    });

    // Client role: listen for the response before sending the request
    let client_rx = Receiver::new(client_port);
    let client_ready = client_rx.readiness();
    let response = thread::spawn(move || client_rx.receive());

    server_ready.wait_bound();
    client_ready.wait_bound();
    send_to(b"Hello, World!", local_endpoint(server_port)).unwrap();

    let request = server.join().unwrap();
    let reply = response.join().unwrap().unwrap();

    // Byte-for-byte echo
    assert_eq!(request.payload, reply.payload);
    assert_eq!(reply.text(), "Hello, World!");
}

#[test]
fn test_sender_address_is_reported() {
    let port = 42134;
    let receiver = Receiver::new(port);
    let ready = receiver.readiness();
    let handle = thread::spawn(move || receiver.receive());

    ready.wait_bound();
    send_to(b"hi", local_endpoint(port)).unwrap();

    let datagram = handle.join().unwrap().unwrap();
    assert!(datagram.peer.ip().is_loopback());
}
