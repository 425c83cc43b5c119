use std::env;

use thiserror::Error;

use crate::helpers::dto::{SummarizeRequest, SummarizeResponse};

/// Base URL used when BACKEND_URL is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// HTTP client for the summarize endpoint. One request per call, no
/// retries; any non-2xx response is reported as a uniform status error.
#[derive(Clone)]
pub struct SummarizeClient {
    http: reqwest::Client,
    base_url: String,
}

impl SummarizeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads the backend base URL from BACKEND_URL, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn summarize(
        &self,
        text: &str,
        percentage: f64,
    ) -> Result<Vec<String>, ClientError> {
        let request = SummarizeRequest {
            text: text.to_string(),
            percentage,
        };

        log::debug!(
            "posting {} bytes to {}/summarize (percentage {})",
            request.text.len(),
            self.base_url,
            percentage
        );

        let response = self
            .http
            .post(format!("{}/summarize", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: SummarizeResponse = response.json().await?;
        Ok(body.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_summarize_returns_sentences_on_success() {
        let server = MockServer::start().await;
        let expected_body = serde_json::json!({"text": "Some text.", "percentage": 0.5});

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"summary": ["First sentence.", "Second sentence."]}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = SummarizeClient::new(server.uri());
        let summary = client.summarize("Some text.", 0.5).await.unwrap();

        assert_eq!(summary, vec!["First sentence.", "Second sentence."]);
    }

    #[tokio::test]
    async fn test_summarize_maps_server_error_to_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SummarizeClient::new(server.uri());
        let error = client.summarize("Some text.", 0.5).await.unwrap_err();

        match error {
            ClientError::Status(status) => assert_eq!(status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_summarize_rejects_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SummarizeClient::new(server.uri());
        let error = client.summarize("Some text.", 0.5).await.unwrap_err();

        assert!(matches!(error, ClientError::Transport(_)));
    }
}
