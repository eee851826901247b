//! Network side of the checks: the [`HttpClient`] seam, the response model and
//! the reqwest-backed client.

mod client;
mod history;
mod response;

#[cfg(test)]
pub(crate) mod mock;

pub use client::ReqwestClient;
pub use history::{History, HistoryEntry};
pub use response::Response;

use url::Url;

use crate::errors::ClientError;

/// The HTTP client the checks drive.
///
/// A client issues HEAD requests, remembers the last response and the URI it
/// was finally served from, and can be told whether to follow redirects.
pub trait HttpClient {
    /// Issues a HEAD request to `url`, which may be relative to the client's base URL.
    fn send_head(&mut self, url: &str) -> Result<(), ClientError>;

    /// The response to the most recent request.
    fn last_response(&self) -> Option<&Response>;

    /// The URI the most recent response was served from, after any redirects.
    fn last_request_uri(&self) -> Option<&Url> {
        self.history().current().map(|entry| &entry.final_url)
    }

    fn history(&self) -> &History;

    fn set_follow_redirects(&mut self, follow: bool);

    fn is_following_redirects(&self) -> bool;
}

/// Resolves `url` against `base`. Absolute URLs are returned as-is.
pub fn resolve_url(base: Option<&Url>, url: &str) -> Result<Url, ClientError> {
    match Url::parse(url) {
        Ok(absolute) => Ok(absolute),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => Ok(base.join(url)?),
            None => Err(ClientError::RelativeUrlWithoutBase(url.to_string())),
        },
        Err(e) => Err(e.into()),
    }
}
