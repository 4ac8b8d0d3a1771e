// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type. The UI collapses every fetch-related variant
/// to a single fixed banner message; the variants exist so stderr
/// diagnostics can say what actually went wrong.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, TLS, DNS).
    Http(String),
    /// The API answered with a non-success HTTP status.
    Api(String),
    /// The response body did not match the expected payload shape.
    Payload(String),
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::Payload(e) => write!(f, "Payload Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
