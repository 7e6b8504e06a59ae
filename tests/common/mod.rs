//! Shared helpers for integration tests
//!
//! A minimal canned-response HTTP listener: accepts exactly one connection,
//! reads one request (headers plus Content-Length body), answers with a
//! fixed status line and body, and hands the raw request bytes back to the
//! test for inspection.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use keypool_admin::config::ConsoleConfig;

/// Serve exactly one canned HTTP response; resolves to the raw request bytes
pub async fn one_shot_server(
    status_line: &'static str,
    body: String,
) -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_http_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (addr, handle)
}

/// A localhost address with nothing listening on it
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Console configuration pointed at a local test listener
pub fn config_for(addr: SocketAddr) -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    config.endpoint = format!("http://{}/functions/v1/key-management", addr);
    config.service_key = "test-service-key".to_string();
    config.request_timeout = 5;
    config
}

/// Parse the JSON body out of a captured request
pub fn request_json(request: &[u8]) -> serde_json::Value {
    let header_end = find_header_end(request).expect("no header terminator in request");
    serde_json::from_slice(&request[header_end + 4..]).expect("request body is not JSON")
}

async fn read_http_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);

        if let Some(header_end) = find_header_end(&request) {
            let headers = String::from_utf8_lossy(&request[..header_end]);
            let content_length = headers
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if request.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    request
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|window| window == b"\r\n\r\n")
}
