//! Minimal HTTP response model for HEAD requests.
//!
//! This struct represents the status line and headers of the **last** response
//! received by a client. It contains the final URL (after redirects, if the
//! client follows them), status code + reason and the response headers. HEAD
//! responses carry no body, so none is kept.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names, so `header("location")` and `header("Location")` agree.
//! - `status_text` is derived from the status code's canonical reason phrase
//!   and is `"Unknown"` for non-standard codes.
//!
use std::borrow::Cow;

use http::header::LOCATION;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Status and headers of a received HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `301`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Moved Permanently"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,
}

impl Response {
    pub fn new(url: url::Url, status: u16, headers: HeaderMap) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();

        Self {
            url,
            status,
            status_text,
            headers,
        }
    }

    /// Returns the first value of header `name`.
    ///
    /// Malformed header names are treated as absent. Values that are not
    /// plain ASCII (raw UTF-8 sent by some servers) are decoded lossily.
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        self.headers.get(name).map(decode)
    }

    /// Returns the `Location` header, if any.
    pub fn location(&self) -> Option<Cow<'_, str>> {
        self.headers.get(LOCATION).map(decode)
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

fn decode(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}
