//! Chat backend client — wraps the `query/execute` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Backend reply envelope. `result` is usually a JSON block sequence but
/// can be plain prose; interpretation is the caller's concern.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    pub result: String,
}

/// Client for the analytics query endpoint.
#[derive(Clone)]
pub struct ChatClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    /// Execute one analytics query. Non-success statuses surface as typed
    /// errors with the response body attached.
    pub async fn execute_query(&self, query: &str) -> Result<QueryResult> {
        let url = format!(
            "{}/api/v1/query/execute",
            self.config.base_url.trim_end_matches('/')
        );
        debug!(%url, query_len = query.len(), "executing query");

        let mut request = self.client.post(&url).json(&QueryRequest { query });
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let duration = Duration::from_secs(self.config.timeout_secs);
        let response = timeout(duration, request.send())
            .await
            .map_err(|_| ApiError::Timeout(self.config.timeout_secs))??;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: QueryResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_result_deserialize() {
        let result: QueryResult =
            serde_json::from_str(r#"{"result":"[{\"type\":\"paragraph\",\"text\":\"hi\"}]"}"#)
                .unwrap();
        assert!(result.result.contains("paragraph"));
    }

    #[test]
    fn test_query_request_shape() {
        let body = serde_json::to_string(&QueryRequest { query: "revenue" }).unwrap();
        assert_eq!(body, r#"{"query":"revenue"}"#);
    }
}
