//! Redirect checks on top of an [`HttpClient`].
//!
//! Every check issues at most one HEAD request per URL it is given, hands the
//! observed status, `Location` header and final URI to the [`AssertionSink`]
//! and returns. Checks that need a particular follow-redirects setting take a
//! [`FollowGuard`] for their duration, so the client's flag is back at its
//! previous value when the check returns, whether it passed or not.

mod guard;

pub use guard::FollowGuard;

use std::borrow::Cow;

use http::header::LOCATION;
use log::info;
use url::Url;

use crate::assertions::{AssertionSink, Expectation, FailFast};
use crate::errors::{CheckError, ClientError};
use crate::net::{HttpClient, Response};
use crate::protocol::Protocol;

pub const PERMANENT_REDIRECT: u16 = 301;
pub const TEMPORARY_REDIRECT: u16 = 307;
const OK: u16 = 200;

/// Asserts redirect behaviour of the site behind an [`HttpClient`].
pub struct RedirectChecker<C: HttpClient, S: AssertionSink = FailFast> {
    client: C,
    sink: S,
}

impl<C: HttpClient> RedirectChecker<C, FailFast> {
    /// Creates a checker that fails on the first violated expectation.
    pub fn new(client: C) -> Self {
        Self::with_sink(client, FailFast)
    }
}

impl<C: HttpClient, S: AssertionSink> RedirectChecker<C, S> {
    pub fn with_sink(client: C, sink: S) -> Self {
        Self { client, sink }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (C, S) {
        (self.client, self.sink)
    }

    /// Sends a HEAD request with the client's current follow setting.
    pub fn send_head(&mut self, url: &str) -> Result<(), CheckError> {
        self.client.send_head(url)?;
        Ok(())
    }

    pub fn set_follow_redirects(&mut self, follow: bool) {
        self.client.set_follow_redirects(follow);
    }

    pub fn is_following_redirects(&self) -> bool {
        self.client.is_following_redirects()
    }

    /// Checks that the last response is a 301 whose `Location` contains `url`.
    ///
    /// With `check_destination_exists`, the redirect target is then requested
    /// with redirects followed and must answer 200 directly: no `Location`
    /// header and no further hop.
    pub fn assert_permanent_redirect_to(&mut self, url: &str, check_destination_exists: bool) -> Result<(), CheckError> {
        let response = self.client.last_response().ok_or(ClientError::NoResponse)?;
        let served_from = self
            .client
            .last_request_uri()
            .unwrap_or(&response.url)
            .clone();

        self.sink.check(Expectation::StatusEquals {
            expected: PERMANENT_REDIRECT,
            actual: response.status,
        })?;
        self.sink.check(location_contains(url, response))?;

        let location = response.location().map(Cow::into_owned);
        info!("Checked permanent redirect from {} to '{}'", served_from, url);

        if !check_destination_exists {
            return Ok(());
        }

        // Only reachable without a Location header when the sink lets failures through
        let Some(location) = location else {
            return Ok(());
        };
        let destination = served_from.join(&location).map_err(ClientError::from)?;

        let mut client = FollowGuard::new(&mut self.client, true);
        let reached = head(&mut *client, destination.as_str())?;
        let final_uri = final_uri(&*client, &reached);

        self.sink.check(Expectation::StatusEquals {
            expected: OK,
            actual: reached.status,
        })?;
        self.sink.check(location_absent(&reached))?;
        self.sink.check(Expectation::UriEquals {
            expected: destination.to_string(),
            actual: final_uri.to_string(),
        })?;

        info!("Checked redirect destination {} exists", destination);
        Ok(())
    }

    /// Checks that `old_url` answers `status_code` with a `Location` containing `new_url`.
    pub fn assert_redirect_between(&mut self, old_url: &str, new_url: &str, status_code: u16) -> Result<(), CheckError> {
        let mut client = FollowGuard::new(&mut self.client, false);
        let response = head(&mut *client, old_url)?;

        self.sink.check(Expectation::StatusEquals {
            expected: status_code,
            actual: response.status,
        })?;
        self.sink.check(location_contains(new_url, &response))?;

        info!("Checked {} redirect from '{}' to '{}'", status_code, old_url, new_url);
        Ok(())
    }

    pub fn assert_permanent_redirect_between(&mut self, old_url: &str, new_url: &str) -> Result<(), CheckError> {
        self.assert_redirect_between(old_url, new_url, PERMANENT_REDIRECT)
    }

    pub fn assert_temporary_redirect_between(&mut self, old_url: &str, new_url: &str) -> Result<(), CheckError> {
        self.assert_redirect_between(old_url, new_url, TEMPORARY_REDIRECT)
    }

    /// Checks that `url` answers 200 without a `Location` header. `"/"` means the base URL.
    pub fn assert_url_does_not_redirect(&mut self, url: &str) -> Result<(), CheckError> {
        let url = if url == "/" { "" } else { url };

        let mut client = FollowGuard::new(&mut self.client, false);
        let response = head(&mut *client, url)?;

        self.sink.check(Expectation::StatusEquals {
            expected: OK,
            actual: response.status,
        })?;
        self.sink.check(location_absent(&response))?;

        info!("Checked '{}' does not redirect", url);
        Ok(())
    }

    /// Checks that, after following all redirects, `url` is served over `protocol`.
    ///
    /// Leading slashes are stripped from `url`, so it resolves relative to the
    /// base URL's path. The final URI must still contain it.
    pub fn assert_protocol_always_used_for(&mut self, url: &str, protocol: Protocol) -> Result<(), CheckError> {
        let url = url.trim_start_matches('/');

        let mut client = FollowGuard::new(&mut self.client, true);
        let response = head(&mut *client, url)?;
        let final_uri = final_uri(&*client, &response);

        self.sink.check(Expectation::StatusEquals {
            expected: OK,
            actual: response.status,
        })?;
        self.sink.check(Expectation::UriContains {
            expected: url.to_string(),
            actual: final_uri.to_string(),
        })?;
        self.sink.check(Expectation::SchemeEquals {
            expected: protocol,
            actual: final_uri.scheme().to_string(),
        })?;

        info!("Checked '{}' is always served over {}", url, protocol);
        Ok(())
    }
}

fn head<C: HttpClient + ?Sized>(client: &mut C, url: &str) -> Result<Response, ClientError> {
    client.send_head(url)?;
    client.last_response().cloned().ok_or(ClientError::NoResponse)
}

fn final_uri<C: HttpClient + ?Sized>(client: &C, response: &Response) -> Url {
    client
        .last_request_uri()
        .cloned()
        .unwrap_or_else(|| response.url.clone())
}

fn location_contains(expected: &str, response: &Response) -> Expectation {
    Expectation::HeaderContains {
        name: LOCATION.to_string(),
        expected: expected.to_string(),
        actual: response.location().map(Cow::into_owned),
    }
}

fn location_absent(response: &Response) -> Expectation {
    Expectation::HeaderAbsent {
        name: LOCATION.to_string(),
        actual: response.location().map(Cow::into_owned),
    }
}
