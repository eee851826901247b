//! Test-authoring vocabulary for redirect checks.
//!
//! [`SeeRedirects`] phrases the checks the way acceptance tests read:
//!
//! ```ignore
//! use redirect_checks::prelude::*;
//!
//! let mut i = RedirectChecker::new(ReqwestClient::new(Some(config))?);
//! i.see_permanent_redirect_between("/old-page", "/new-page")?;
//! i.see_https_protocol_always_used_for("/checkout")?;
//! i.url_does_not_redirect("/")?;
//! ```

use crate::assertions::AssertionSink;
use crate::checker::{RedirectChecker, PERMANENT_REDIRECT, TEMPORARY_REDIRECT};
use crate::errors::CheckError;
use crate::net::HttpClient;
use crate::protocol::Protocol;

pub trait SeeRedirects {
    fn set_follow_redirects(&mut self, follow: bool);

    fn assert_permanent_redirect_to(&mut self, url: &str, check_destination_exists: bool) -> Result<(), CheckError>;

    fn assert_redirect_between(&mut self, old_url: &str, new_url: &str, status_code: u16) -> Result<(), CheckError>;

    fn assert_url_does_not_redirect(&mut self, url: &str) -> Result<(), CheckError>;

    fn assert_protocol_always_used_for(&mut self, url: &str, protocol: Protocol) -> Result<(), CheckError>;

    /// Turns redirect following on or off for subsequent requests.
    fn follow_redirects(&mut self, follow: bool) {
        self.set_follow_redirects(follow);
    }

    /// The last response is a 301 to `url`; with `check_destination_exists`
    /// the destination must also answer 200 without redirecting again.
    fn see_permanent_redirect_to(&mut self, url: &str, check_destination_exists: bool) -> Result<(), CheckError> {
        self.assert_permanent_redirect_to(url, check_destination_exists)
    }

    fn see_permanent_redirect_to_http_for(&mut self, url: &str) -> Result<(), CheckError> {
        self.assert_protocol_always_used_for(url, Protocol::Http)
    }

    fn see_permanent_redirect_to_https_for(&mut self, url: &str) -> Result<(), CheckError> {
        self.assert_protocol_always_used_for(url, Protocol::Https)
    }

    fn see_redirect_between(&mut self, old_url: &str, new_url: &str, status_code: u16) -> Result<(), CheckError> {
        self.assert_redirect_between(old_url, new_url, status_code)
    }

    fn see_permanent_redirect_between(&mut self, old_url: &str, new_url: &str) -> Result<(), CheckError> {
        self.assert_redirect_between(old_url, new_url, PERMANENT_REDIRECT)
    }

    fn see_temporary_redirect_between(&mut self, old_url: &str, new_url: &str) -> Result<(), CheckError> {
        self.assert_redirect_between(old_url, new_url, TEMPORARY_REDIRECT)
    }

    fn url_does_not_redirect(&mut self, url: &str) -> Result<(), CheckError> {
        self.assert_url_does_not_redirect(url)
    }

    fn see_http_protocol_always_used_for(&mut self, url: &str) -> Result<(), CheckError> {
        self.assert_protocol_always_used_for(url, Protocol::Http)
    }

    fn see_https_protocol_always_used_for(&mut self, url: &str) -> Result<(), CheckError> {
        self.assert_protocol_always_used_for(url, Protocol::Https)
    }
}

impl<C: HttpClient, S: AssertionSink> SeeRedirects for RedirectChecker<C, S> {
    fn set_follow_redirects(&mut self, follow: bool) {
        RedirectChecker::set_follow_redirects(self, follow)
    }

    fn assert_permanent_redirect_to(&mut self, url: &str, check_destination_exists: bool) -> Result<(), CheckError> {
        RedirectChecker::assert_permanent_redirect_to(self, url, check_destination_exists)
    }

    fn assert_redirect_between(&mut self, old_url: &str, new_url: &str, status_code: u16) -> Result<(), CheckError> {
        RedirectChecker::assert_redirect_between(self, old_url, new_url, status_code)
    }

    fn assert_url_does_not_redirect(&mut self, url: &str) -> Result<(), CheckError> {
        RedirectChecker::assert_url_does_not_redirect(self, url)
    }

    fn assert_protocol_always_used_for(&mut self, url: &str, protocol: Protocol) -> Result<(), CheckError> {
        RedirectChecker::assert_protocol_always_used_for(self, url, protocol)
    }
}
