use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};

/// A response whose headers have arrived, paired with the instant its request
/// was dispatched. The body has not been read yet.
#[derive(Debug)]
pub struct DispatchedResponse {
    response: reqwest::Response,
    started: Instant,
}

impl DispatchedResponse {
    pub fn new(response: reqwest::Response, started: Instant) -> Self {
        Self { response, started }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn into_response(self) -> reqwest::Response {
        self.response
    }
}

/// Size in bytes of the response as it would be dumped on the wire: status
/// line, one line per header, the blank separator line, then the body.
pub fn dump_size(version: Version, status: StatusCode, headers: &HeaderMap, body_len: usize) -> u64 {
    // "HTTP/1.1 200 OK\r\n"
    let status_line = format!("{version:?}").len()
        + 1
        + status.as_str().len()
        + status.canonical_reason().map_or(0, |reason| reason.len() + 1)
        + 2;

    let header_lines: usize = headers
        .iter()
        .map(|(name, value)| name.as_str().len() + 2 + value.as_bytes().len() + 2)
        .sum();

    (status_line + header_lines + 2 + body_len) as u64
}
