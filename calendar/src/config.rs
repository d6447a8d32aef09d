//! Widget configuration.
//!
//! Identity and token arrive from the host out-of-band (the Mini App passes
//! them as URL query parameters). They are validated here exactly once; the
//! rest of the crate never reads ambient environment state.

use crate::{Error, Result};

/// Configuration for one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Telegram user id sent as the `t_user_id` request field
    pub user_id: i64,
    /// Bearer token forwarded opaquely in the Authorization header
    pub token: String,
    /// Reminders endpoint URL
    pub endpoint: String,
}

impl WidgetConfig {
    /// Create a validated configuration.
    pub fn new(user_id: i64, token: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let endpoint = endpoint.into();

        if token.trim().is_empty() {
            return Err(Error::Config("auth token is empty".to_string()));
        }
        if endpoint.trim().is_empty() {
            return Err(Error::Config("reminders endpoint is empty".to_string()));
        }

        Ok(Self {
            user_id,
            token,
            endpoint,
        })
    }

    /// Build a configuration from raw query-parameter values.
    ///
    /// Absence of either parameter is a configuration error, not a crash.
    pub fn from_params(
        user_id: Option<&str>,
        token: Option<&str>,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        let user_id = user_id
            .ok_or_else(|| Error::Config("missing user id parameter".to_string()))?
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::Config(format!("invalid user id parameter: {}", e)))?;

        let token = token.ok_or_else(|| Error::Config("missing auth token parameter".to_string()))?;

        Self::new(user_id, token, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let config = WidgetConfig::from_params(Some("42"), Some("secret"), "https://api.example.com/reminders")
            .unwrap();
        assert_eq!(config.user_id, 42);
        assert_eq!(config.token, "secret");
    }

    #[test]
    fn test_missing_user_id_is_config_error() {
        let err = WidgetConfig::from_params(None, Some("secret"), "https://api.example.com").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_garbage_user_id_is_config_error() {
        let err = WidgetConfig::from_params(Some("not-a-number"), Some("secret"), "https://api.example.com")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_token_is_config_error() {
        let err = WidgetConfig::new(42, "  ", "https://api.example.com").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_endpoint_is_config_error() {
        let err = WidgetConfig::new(42, "secret", "").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
