//! HTTP client helpers for tests.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

/// Decoded body plus the `x-synapse-status` header.
#[derive(Debug)]
pub struct TestResponse<T> {
    pub status: u16,
    pub synapse_status: String,
    pub body: T,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<TestResponse<T>, TestClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &'static str,
    ) -> Result<TestResponse<T>, TestClientError> {
        let resp = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<TestResponse<T>, TestClientError> {
        let resp = self.client.get(self.url(path)).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<TestResponse<T>, TestClientError> {
        let status = resp.status().as_u16();
        let synapse_status = resp
            .headers()
            .get("x-synapse-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let text = resp.text().await?;
        let body = serde_json::from_str(&text)
            .map_err(|e| TestClientError::UnexpectedBody(status, format!("{}: {}", e, text)))?;

        Ok(TestResponse {
            status,
            synapse_status,
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected body for HTTP {0}: {1}")]
    UnexpectedBody(u16, String),
}
