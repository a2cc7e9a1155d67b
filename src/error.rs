// src/error.rs
use thiserror::Error;

/// The extractor's only failure kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document parsed, but no row carried a flight id.
    #[error("No flight data found in the response")]
    NoFlights,

    /// Anything lower-level (bad selector, undecodable JSON, ...).
    #[error("Failed to parse flight data: {0}")]
    Markup(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("empty date")]
    Empty,

    #[error("unrecognized date: {0:?}")]
    Unrecognized(String),
}

/// Upstream site / session failures.
#[derive(Error, Debug)]
pub enum NetError {
    #[error("Username and password are required")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("No session cookie received")]
    NoSessionCookie,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Session invalid")]
    SessionInvalid,

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short text for a status line.
    pub fn user_message(&self) -> String {
        match self {
            Error::Parse(ParseError::NoFlights) => s!("No flights found"),
            Error::Parse(ParseError::Markup(_)) => s!("Could not read flight data"),
            Error::Net(NetError::SessionExpired) => s!("Session expired, please log in again"),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
