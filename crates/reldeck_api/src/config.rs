//! Configuration for the chat backend client.

/// Connection settings for the analytics backend.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Backend base URL (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Optional bearer token for Authorization
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `RELDECK_API_URL` (default: http://127.0.0.1:8000)
    /// Optional: `RELDECK_API_TOKEN`
    /// Optional: `RELDECK_API_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> crate::error::Result<Self> {
        let base_url =
            std::env::var("RELDECK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("RELDECK_API_TOKEN").ok().filter(|t| !t.is_empty());
        let timeout_secs = match std::env::var("RELDECK_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                crate::error::ApiError::Config(format!(
                    "RELDECK_API_TIMEOUT_SECS must be a number, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            token,
            timeout_secs,
        })
    }

    /// Create a new config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the bearer token sent with each request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ApiConfig::new("http://deck.local:9000")
            .token("secret")
            .timeout_secs(15);
        assert_eq!(config.base_url, "http://deck.local:9000");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new(DEFAULT_BASE_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
