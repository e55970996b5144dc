//! Error type for backend API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a fetch can produce collapses into [`ApiError`] at the
//! `net::api` boundary. Pages never see transport details; they call
//! [`ApiError::user_message`] and render the result, matching the server's
//! convention of putting a display-ready string in the `error` body field.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure surfaced by an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status. `message` carries the
    /// server's `error` body field when one was sent.
    #[error("request failed ({status})")]
    Status { status: u16, message: Option<String> },
    /// The response arrived but its body did not decode as expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for direct display in the UI.
    ///
    /// Prefers the server-provided message; otherwise falls back to a
    /// generic status line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(msg), .. } => msg.clone(),
            Self::Status { status, message: None } => format!("Request failed ({status})"),
            Self::Network(msg) | Self::Decode(msg) => msg.clone(),
        }
    }

    /// HTTP status for status failures, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure means the caller has no valid session.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
