// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures surfaced by the catalog fetch and the ambient config layer.
///
/// The three catalog variants mirror what can go wrong with the single
/// outbound request: the transport itself, a non-success status, or a body
/// that does not decode as a product list. All of them collapse into one
/// user-visible message; `Display` keeps the status code or underlying
/// description in the text.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    Network(String),
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not a valid product list.
    Decode(String),
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Status(code) => write!(f, "HTTP Error: status {}", code),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
