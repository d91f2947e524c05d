use async_trait::async_trait;
use popcorn_config::{ApiKey, Config};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::endpoints::ApiRequest;
use super::transport::ApiTransport;
use crate::error::{FetchError, Result};

/// reqwest-backed [`ApiTransport`].
///
/// Holds the base URL and API key from [`Config`]; every request gets
/// `api_key` appended and is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http.timeout)
            .build()
            .map_err(|err| {
                FetchError::Network(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing reqwest client. Its own timeout settings apply.
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.api.base_url.clone(),
            api_key: config.api.api_key.clone(),
        }
    }

    fn url_for(&self, request: &ApiRequest) -> String {
        let query = request.query_string();
        let key = urlencoding::encode(self.api_key.expose_secret());
        if query.is_empty() {
            format!("{}{}?api_key={key}", self.base_url, request.path())
        } else {
            format!("{}{}?{query}&api_key={key}", self.base_url, request.path())
        }
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value> {
        debug!(path = request.path(), query = %request.query_string(), "GET");

        let response = self.client.get(self.url_for(request)).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(path = request.path(), status = status.as_u16(), "upstream rejected request");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.without_url().to_string()))?;

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = body
                .get("status_message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string();
            return Err(FetchError::Api { message });
        }

        Ok(body)
    }
}
