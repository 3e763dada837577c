//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one canned response for every GET. Can optionally redirect the first
//! hop, or accept connections and never answer (to exercise the timeout).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Status line after `HTTP/1.1 `, e.g. "200 OK".
    pub status: &'static str,
    /// `Content-Type` header; omitted when None.
    pub content_type: Option<&'static str>,
    /// `Content-Encoding` header; the body is sent as given, already encoded.
    pub content_encoding: Option<&'static str>,
    /// If true, `/` answers 302 to `/final` and only `/final` serves the body.
    pub redirect_root: bool,
    /// If true, every path answers 302 to itself.
    pub redirect_loop: bool,
    /// If true, read the request and never reply.
    pub silent: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: Some("application/octet-stream"),
            content_encoding: None,
            redirect_root: false,
            redirect_loop: false,
            silent: false,
        }
    }
}

/// Starts a server in a background thread serving `body` with 200 OK. Returns
/// the base URL (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
#[allow(dead_code)]
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ServerOptions::default())
}

/// Like `start` but with a custom status, content type or behavior.
pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a port nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/image.jpg", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &ServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    if opts.silent {
        thread::sleep(Duration::from_secs(10));
        return;
    }

    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if opts.redirect_loop {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            path
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if opts.redirect_root && path == "/" {
        let _ = stream.write_all(
            b"HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Type: text/html\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let content_type = opts
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let content_encoding = opts
        .content_encoding
        .map(|ce| format!("Content-Encoding: {}\r\n", ce))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        content_type,
        content_encoding
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    (method, path)
}
