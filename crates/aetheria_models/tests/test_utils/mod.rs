//! Test utilities for Aetheria model tests.
//!
//! Provides a one-shot HTTP server that records the request it receives and
//! answers with a canned response.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the fake server saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// e.g. `POST /v1beta/models/m:generateContent HTTP/1.1`
    pub request_line: String,
    /// Header names lowercased
    pub headers: Vec<(String, String)>,
    /// Raw request body
    pub body: String,
}

impl CapturedRequest {
    /// Look up a header by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

fn headers(content_length: usize) -> String {
    format!(
        "content-type: application/json\r\ncontent-length: {}\r\nconnection: close",
        content_length
    )
}

/// Accept exactly one connection and answer it with `status` and `body`.
///
/// Returns the base URL to configure the client with and a handle resolving
/// to the captured request.
pub async fn serve_once(
    status: u16,
    body: impl Into<String>,
) -> (String, JoinHandle<CapturedRequest>) {
    let body = body.into();
    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}\r\n\r\n{}",
        status,
        reason,
        headers(body.len()),
        body
    );
    serve_raw(response).await
}

/// Like [`serve_once`], but announces `declared` body bytes and sends only
/// `body` before closing the connection.
pub async fn serve_truncated(
    status: u16,
    declared: usize,
    body: &str,
) -> (String, JoinHandle<CapturedRequest>) {
    let response = format!(
        "HTTP/1.1 {} Error\r\n{}\r\n\r\n{}",
        status,
        headers(declared),
        body
    );
    serve_raw(response).await
}

/// Accept exactly one connection and write `response` verbatim.
async fn serve_raw(response: String) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();

        let length = headers
            .iter()
            .find(|(key, _)| key == "content-length")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + length {
            let n = socket.read(&mut chunk).await.expect("read body");
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            String::from_utf8_lossy(&buf[header_end..header_end + length]).to_string();

        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        CapturedRequest {
            request_line,
            headers,
            body: request_body,
        }
    });

    (format!("http://{}/v1beta/models", addr), handle)
}
