use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::errors::ClientError;

const DEFAULT_USER_AGENT: &str = "RedirectChecks/0.1 (+https://github.com/redirect-checks)";
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for the HTTP client that issues the HEAD requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL relative request paths are resolved against
    pub base_url: Option<Url>,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Whether the client follows redirects when it is created
    pub follow_redirects: bool,
    /// Maximum number of hops followed before the request errors out
    pub max_redirects: usize,
    /// Request timeout in milliseconds. None leaves reqwest's default in place.
    pub timeout_ms: Option<u64>,
    /// Honour proxies from the environment (`HTTP_PROXY`, `HTTPS_PROXY`, ...)
    pub use_env_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout_ms: None,
            use_env_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from a JSON document. Missing fields take their defaults.
    ///
    /// ```
    /// # use redirect_checks::ClientConfig;
    /// let config = ClientConfig::from_json_str(r#"{ "base_url": "https://example.com/" }"#).unwrap();
    /// assert!(config.follow_redirects);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_env_proxy(mut self, use_env_proxy: bool) -> Self {
        self.use_env_proxy = use_env_proxy;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_follow_redirects() {
        let config = ClientConfig::default();
        assert!(config.follow_redirects);
        assert_eq!(config.max_redirects, 10);
        assert!(config.base_url.is_none());
        assert!(config.timeout().is_none());
        assert!(config.use_env_proxy);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClientConfig::from_json_str(
            r#"{ "base_url": "https://example.com/app/", "timeout_ms": 1500 }"#,
        )
        .unwrap();

        assert_eq!(config.base_url.as_ref().unwrap().as_str(), "https://example.com/app/");
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.follow_redirects);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = ClientConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "follow_redirects": false, "max_redirects": 3 }}"#).unwrap();

        let config = ClientConfig::from_json_file(file.path()).unwrap();
        assert!(!config.follow_redirects);
        assert_eq!(config.max_redirects, 3);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ClientConfig::from_json_file("/nonexistent/redirects.json").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
