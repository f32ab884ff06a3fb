use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where built feed URLs point: `(scheme, host, port)`.
///
/// The port is only kept when it differs from the scheme's default, the same
/// way a browser reports `location.port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    #[error("invalid origin `{input}`: {reason}")]
    Invalid { input: String, reason: String },
    #[error("origin `{0}` has no host")]
    MissingHost(String),
}

impl Origin {
    /// A browser-style scheme with its trailing `:` (`"https:"`) is accepted
    /// and stored as `"https"`.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        let mut scheme = scheme.into();
        if scheme.ends_with(':') {
            scheme.pop();
        }
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// Parse an origin from a URL string such as `http://localhost:8080`.
    ///
    /// Any path, query or fragment is ignored.
    pub fn parse(input: &str) -> Result<Self, OriginError> {
        let input = input.trim();
        let parsed = url::Url::parse(input).map_err(|e| OriginError::Invalid {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| OriginError::MissingHost(input.to_string()))?;

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
            port: parsed.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for Origin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Origin {
    type Error = OriginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.to_string()
    }
}
