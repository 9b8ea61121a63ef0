// src/net.rs
//
// Minimal HTTP/1.0 client over plain TCP, no TLS. Shared by the roster
// store and the species catalog. HTTP/1.0 with Connection: close means
// the server ends the connection and we read to EOF; no chunked transfer
// to deal with. Good enough for small JSON payloads on a LAN.

use std::{ io::{ Read, Write }, net::TcpStream, time::Duration };

use thiserror::Error;

const TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = concat!("pokebox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum NetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP {code}: {host}{path}")]
    Status { code: u16, host: String, path: String },

    #[error("malformed HTTP response from {host}{path}")]
    Malformed { host: String, path: String },
}

impl NetError {
    /// Status code, if the server answered at all.
    pub fn code(&self) -> Option<u16> {
        match self {
            NetError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub fn get(host: &str, path: &str) -> Result<String, NetError> {
    request("GET", host, path, &[], None)
}

pub fn post(host: &str, path: &str, headers: &[(&str, &str)], body: &str) -> Result<String, NetError> {
    request("POST", host, path, headers, Some(body))
}

pub fn patch(host: &str, path: &str, headers: &[(&str, &str)], body: &str) -> Result<String, NetError> {
    request("PATCH", host, path, headers, Some(body))
}

pub fn delete(host: &str, path: &str) -> Result<(), NetError> {
    request("DELETE", host, path, &[], None).map(|_| ())
}

/// Perform one HTTP request and return the response body.
///
/// * `host` – hostname (no protocol, no port; port 80 assumed)
/// * `path` – path + query string starting with `/`
/// * `headers` – extra headers beyond Host/User-Agent/Connection
/// * `body` – JSON payload; sets Content-Type and Content-Length
///
/// Any 2xx status counts as success. 204-style responses yield an
/// empty string.
pub fn request(
    method: &str,
    host: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> Result<String, NetError> {
    let mut stream = TcpStream::connect((host, 80))?;
    stream.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    stream.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let mut req = format!(
        "{method} {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n"
    );
    for (name, value) in headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    if let Some(body) = body {
        req.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n",
            body.len()
        ));
    }
    req.push_str("\r\n");
    if let Some(body) = body {
        req.push_str(body);
    }

    stream.write_all(req.as_bytes())?;
    stream.flush()?;

    // Read the entire response
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let code = status_code(status_line).ok_or_else(|| NetError::Malformed {
        host: s!(host),
        path: s!(path),
    })?;
    if !(200..300).contains(&code) {
        return Err(NetError::Status { code, host: s!(host), path: s!(path) });
    }

    // Split off the body. Responses without one (204) just yield "".
    match resp.find("\r\n\r\n") {
        Some(ix) => Ok(resp[ix + 4..].to_string()),
        None => Ok(String::new()),
    }
}

// "HTTP/1.0 200 OK" → 200
fn status_code(line: &str) -> Option<u16> {
    line.split_whitespace().nth(1)?.parse().ok()
}

/// Percent-encode a path segment. Species names typed by the user end up
/// in catalog URLs, so anything outside the unreserved set gets escaped.
pub fn urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_parses() {
        assert_eq!(status_code("HTTP/1.0 200 OK"), Some(200));
        assert_eq!(status_code("HTTP/1.1 404 Not Found"), Some(404));
        assert_eq!(status_code("garbage"), None);
    }

    #[test]
    fn urlencode_passes_unreserved() {
        assert_eq!(urlencode("mr.mime-2_x~"), "mr.mime-2_x~");
    }

    #[test]
    fn urlencode_escapes_the_rest() {
        assert_eq!(urlencode("farfetch'd"), "farfetch%27d");
        assert_eq!(urlencode("nidoran female"), "nidoran%20female");
    }
}
