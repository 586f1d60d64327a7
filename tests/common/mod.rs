//! Shared helpers for driving the `reana-client` binary

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread::JoinHandle;

/// A canned HTTP response served by [`MockServer`]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    /// Bytes written verbatim instead of a well-formed reply
    pub raw: Option<String>,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            raw: None,
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            raw: None,
        }
    }

    /// Send `reply` as the whole response, headers included
    pub fn raw(reply: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: String::new(),
            raw: Some(reply.into()),
        }
    }
}

/// Loopback HTTP server answering one connection per canned response
pub struct MockServer {
    url: String,
    handle: JoinHandle<Vec<String>>,
}

impl MockServer {
    pub fn start(responses: Vec<MockResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let mut request_lines = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request = String::from_utf8_lossy(&request);
                request_lines.push(request.lines().next().unwrap_or_default().to_string());

                let reply = response.raw.unwrap_or_else(|| {
                    format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        response.status,
                        reason(response.status),
                        response.body.len(),
                        response.body
                    )
                });
                stream.write_all(reply.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            request_lines
        });

        Self { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for every response to be served and return the request lines
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "FORBIDDEN",
        500 => "INTERNAL SERVER ERROR",
        _ => "UNKNOWN",
    }
}

/// A server URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

/// Build a `reana-client` invocation isolated from the caller's environment
pub fn reana_client(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reana-client"));
    cmd.current_dir(dir);
    for var in [
        "REANA_SERVER_URL",
        "REANA_ACCESS_TOKEN",
        "LOG_LEVEL",
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Same as [`reana_client`] with both credentials set
pub fn reana_client_with(dir: &Path, server_url: &str, token: &str) -> Command {
    let mut cmd = reana_client(dir);
    cmd.env("REANA_SERVER_URL", server_url)
        .env("REANA_ACCESS_TOKEN", token);
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Format a table line the way the client does
pub fn row(cells: [&str; 6]) -> String {
    format!(
        "{:<38} {:<12} {:<21} {:<21} {:<21} {:<8}\n",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

pub fn header() -> String {
    row(["NAME", "RUN_NUMBER", "CREATED", "STARTED", "ENDED", "STATUS"])
}
