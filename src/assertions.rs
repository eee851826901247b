//! Expectations evaluated by the redirect checks, and the sinks that decide
//! what a failed expectation means for the running test.
//!
//! A check never inspects the outcome of an [`Expectation`] itself. It hands
//! each one to an [`AssertionSink`], which either lets the check continue or
//! returns an [`AssertionFailure`] that aborts it:
//!
//! - [`FailFast`] returns the first failure as an error (the default).
//! - [`PanicOnFailure`] panics with the failure message, which is what a plain
//!   `#[test]` function wants.
//! - [`SoftAssertions`] records every failure and lets the check run to the end.
//!
use std::fmt;

use log::warn;

use crate::protocol::Protocol;

/// A single expectation about a response or the URI it was served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The response status code equals `expected`.
    StatusEquals { expected: u16, actual: u16 },

    /// Header `name` is present and its value contains `expected`.
    HeaderContains {
        name: String,
        expected: String,
        actual: Option<String>,
    },

    /// Header `name` is not present.
    HeaderAbsent { name: String, actual: Option<String> },

    /// The final URI uses the `expected` scheme.
    SchemeEquals { expected: Protocol, actual: String },

    /// The final URI contains `expected`.
    UriContains { expected: String, actual: String },

    /// The final URI is exactly `expected`.
    UriEquals { expected: String, actual: String },
}

impl Expectation {
    /// Returns true when the observed value satisfies the expectation.
    pub fn holds(&self) -> bool {
        match self {
            Expectation::StatusEquals { expected, actual } => expected == actual,
            Expectation::HeaderContains {
                expected, actual, ..
            } => actual
                .as_deref()
                .is_some_and(|value| value.contains(expected.as_str())),
            Expectation::HeaderAbsent { actual, .. } => actual.is_none(),
            Expectation::SchemeEquals { expected, actual } => expected.as_str() == actual,
            Expectation::UriContains { expected, actual } => actual.contains(expected.as_str()),
            Expectation::UriEquals { expected, actual } => expected == actual,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::StatusEquals { expected, actual } => {
                write!(f, "expected status {}, got {}", expected, actual)
            }
            Expectation::HeaderContains {
                name,
                expected,
                actual: Some(value),
            } => write!(
                f,
                "expected header '{}' to contain '{}', got '{}'",
                name, expected, value
            ),
            Expectation::HeaderContains {
                name,
                expected,
                actual: None,
            } => write!(
                f,
                "expected header '{}' to contain '{}', but it is missing",
                name, expected
            ),
            Expectation::HeaderAbsent { name, actual } => write!(
                f,
                "expected no '{}' header, got '{}'",
                name,
                actual.as_deref().unwrap_or_default()
            ),
            Expectation::SchemeEquals { expected, actual } => {
                write!(f, "expected scheme '{}', got '{}'", expected, actual)
            }
            Expectation::UriContains { expected, actual } => {
                write!(f, "expected URI '{}' to contain '{}'", actual, expected)
            }
            Expectation::UriEquals { expected, actual } => {
                write!(f, "expected URI '{}', got '{}'", expected, actual)
            }
        }
    }
}

/// A violated expectation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Assertion failed: {expectation}")]
pub struct AssertionFailure {
    pub expectation: Expectation,
}

impl AssertionFailure {
    pub fn message(&self) -> String {
        self.expectation.to_string()
    }
}

/// Receives every expectation a check evaluates.
///
/// Returning `Err` aborts the running check; returning `Ok` lets it continue.
pub trait AssertionSink {
    fn check(&mut self, expectation: Expectation) -> Result<(), AssertionFailure>;
}

/// Aborts the check on the first failed expectation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFast;

impl AssertionSink for FailFast {
    fn check(&mut self, expectation: Expectation) -> Result<(), AssertionFailure> {
        if expectation.holds() {
            return Ok(());
        }

        warn!("{}", expectation);
        Err(AssertionFailure { expectation })
    }
}

/// Panics on the first failed expectation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnFailure;

impl AssertionSink for PanicOnFailure {
    fn check(&mut self, expectation: Expectation) -> Result<(), AssertionFailure> {
        if !expectation.holds() {
            panic!("Assertion failed: {}", expectation);
        }
        Ok(())
    }
}

/// Collects failed expectations without aborting.
#[derive(Debug, Default, Clone)]
pub struct SoftAssertions {
    failures: Vec<AssertionFailure>,
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    /// Returns the first recorded failure, if any.
    pub fn into_result(self) -> Result<(), AssertionFailure> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl AssertionSink for SoftAssertions {
    fn check(&mut self, expectation: Expectation) -> Result<(), AssertionFailure> {
        if !expectation.holds() {
            warn!("{}", expectation);
            self.failures.push(AssertionFailure { expectation });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(expected: &str, actual: Option<&str>) -> Expectation {
        Expectation::HeaderContains {
            name: "Location".to_string(),
            expected: expected.to_string(),
            actual: actual.map(str::to_string),
        }
    }

    #[test]
    fn header_contains_needs_header_present() {
        assert!(location("/new", Some("https://example.com/new")).holds());
        assert!(!location("/new", Some("https://example.com/other")).holds());
        assert!(!location("/new", None).holds());
    }

    #[test]
    fn messages_name_the_violation() {
        let status = Expectation::StatusEquals {
            expected: 301,
            actual: 302,
        };
        assert_eq!(status.to_string(), "expected status 301, got 302");

        assert_eq!(
            location("/new", None).to_string(),
            "expected header 'Location' to contain '/new', but it is missing"
        );

        let scheme = Expectation::SchemeEquals {
            expected: Protocol::Https,
            actual: "http".to_string(),
        };
        assert_eq!(scheme.to_string(), "expected scheme 'https', got 'http'");
    }

    #[test]
    fn fail_fast_returns_the_failure() {
        let mut sink = FailFast;
        assert!(sink
            .check(Expectation::StatusEquals {
                expected: 200,
                actual: 200
            })
            .is_ok());

        let err = sink
            .check(Expectation::StatusEquals {
                expected: 200,
                actual: 404,
            })
            .unwrap_err();
        assert_eq!(err.message(), "expected status 200, got 404");
    }

    #[test]
    #[should_panic(expected = "expected status 301, got 200")]
    fn panic_sink_panics_with_message() {
        let _ = PanicOnFailure.check(Expectation::StatusEquals {
            expected: 301,
            actual: 200,
        });
    }

    #[test]
    fn soft_assertions_keep_going() {
        let mut sink = SoftAssertions::new();
        sink.check(location("/a", None)).unwrap();
        sink.check(Expectation::HeaderAbsent {
            name: "Location".to_string(),
            actual: None,
        })
        .unwrap();
        sink.check(Expectation::UriContains {
            expected: "foo".to_string(),
            actual: "https://example.com/bar".to_string(),
        })
        .unwrap();

        assert_eq!(sink.failures().len(), 2);
        let first = sink.into_result().unwrap_err();
        assert!(first.message().contains("'/a'"));
    }
}
