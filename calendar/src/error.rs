//! Error types for the calendar widget.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, fetching or normalizing
/// reminders.
///
/// Record-level problems (a single reminder with an unparseable timestamp)
/// are deliberately not represented here: normalization skips such records
/// and continues.
#[derive(Error, Debug)]
pub enum Error {
    /// Required identity/token/endpoint missing or malformed; no fetch is
    /// attempted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or non-2xx response from the reminders endpoint
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response decoded but did not match the contract (missing fields,
    /// `status` other than "ok")
    #[error("Data error: {0}")]
    Data(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether a fresh attempt may succeed without changing inputs.
    ///
    /// Transport failures are transient; configuration and data errors
    /// require the caller to change something first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_is_retryable() {
        assert!(Error::Transport("connection reset".to_string()).is_retryable());
        assert!(!Error::Config("missing token".to_string()).is_retryable());
        assert!(!Error::Data("status was not ok".to_string()).is_retryable());
    }
}
