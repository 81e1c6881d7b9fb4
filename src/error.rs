//! Error types for the Twitter API client.
//!
//! Every failure in the request pipeline ends up in [`Error`]. The three
//! variants callers usually match on are [`Error::Transport`] (the round trip
//! never completed), [`Error::Api`] (the server answered with a non-2xx
//! status) and [`Error::MalformedEntity`] (a success body did not have the
//! expected shape).

use thiserror::Error;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The network round trip could not be completed
    #[error("Transport failure: {0}")]
    Transport(String),

    /// API returned a non-success status
    ///
    /// `body` is the response body as sent. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD; valid bodies are never altered.
    #[error("API error: status={status}, body={body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text, lossily decoded if it was not UTF-8
        body: String,
    },

    /// A success response could not be decoded into the expected entity
    #[error("Malformed entity: {0}")]
    MalformedEntity(String),

    /// The signer could not produce an authorization value
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The HTTP status code, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, if this is an API error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the round trip itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (4xx response or invalid local input).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedEntity(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
