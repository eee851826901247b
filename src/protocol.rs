use std::fmt;
use std::str::FromStr;

/// URL scheme a site is expected to serve its pages over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown protocol '{0}', expected 'http' or 'https'")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(UnknownProtocol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("HTTPS".parse::<Protocol>(), Ok(Protocol::Https));
        assert_eq!("http".parse::<Protocol>(), Ok(Protocol::Http));
        assert_eq!(
            "ftp".parse::<Protocol>(),
            Err(UnknownProtocol("ftp".to_string()))
        );
    }

    #[test]
    fn displays_as_scheme() {
        assert_eq!(Protocol::Https.to_string(), "https");
        assert_eq!(Protocol::Http.as_str(), "http");
    }
}
