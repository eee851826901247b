use crate::assertions::AssertionFailure;

/// Errors raised by an [`HttpClient`](crate::net::HttpClient) implementation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Relative URL '{0}' given but no base URL is configured")]
    RelativeUrlWithoutBase(String),

    #[error("No response has been received yet")]
    NoResponse,

    #[error("Cannot start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors returned by the redirect checks.
///
/// Transport errors from the client are passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CheckError {
    /// Returns the assertion failure if this error is one.
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            CheckError::Assertion(failure) => Some(failure),
            CheckError::Client(_) => None,
        }
    }
}
