//! Low-level GraphQL-over-HTTP client: `GraphHttp`.
//!
//! Posts rendered query documents to one of three endpoints and hands back the
//! response's `data` object. Internal plumbing for `PairChartClient`, but usable
//! directly for ad-hoc queries.

use crate::config::ChartConfig;
use crate::error::HttpError;
use crate::http::retry::{retry_with, RetryConfig, RetryPolicy};
use crate::query::Document;
use crate::transport::{Endpoint, GraphTransport};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// URLs of the three GraphQL services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub blocks: String,
    pub dex: String,
    pub index_node: String,
}

impl Endpoints {
    pub fn url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Blocks => &self.blocks,
            Endpoint::Dex => &self.dex,
            Endpoint::IndexNode => &self.index_node,
        }
    }
}

impl From<&ChartConfig> for Endpoints {
    fn from(config: &ChartConfig) -> Self {
        Self {
            blocks: config.blocks_url.trim_end_matches('/').to_string(),
            dex: config.dex_url.trim_end_matches('/').to_string(),
            index_node: config.index_node_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<GraphErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorMessage {
    message: String,
}

impl GraphResponse {
    /// Any reported error fails the whole query, even alongside partial data.
    pub(crate) fn into_data(self) -> Result<Map<String, Value>, HttpError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(HttpError::Query(messages.join("; ")));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// GraphQL client for the block-index, DEX and index-node services.
pub struct GraphHttp {
    endpoints: Endpoints,
    client: Client,
    retry: RetryPolicy,
    /// Gateway API key, sent as a bearer token. Never exposed publicly.
    api_key: Arc<RwLock<Option<String>>>,
}

impl GraphHttp {
    pub fn new(endpoints: Endpoints, api_key: Option<String>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            endpoints,
            client: builder
                .build()
                .map_err(|e| HttpError::Client(e.to_string()))?,
            retry: RetryPolicy::Idempotent,
            api_key: Arc::new(RwLock::new(api_key)),
        })
    }

    /// Override the retry policy. Queries are reads, so the default retries.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn set_api_key(&self, key: Option<String>) {
        *self.api_key.write().await = key;
    }

    pub async fn clear_api_key(&self) {
        *self.api_key.write().await = None;
    }

    pub async fn has_api_key(&self) -> bool {
        self.api_key.read().await.is_some()
    }

    /// Post `document` to `endpoint` and return its `data` object.
    pub async fn execute(
        &self,
        endpoint: Endpoint,
        document: &Document,
    ) -> Result<Map<String, Value>, HttpError> {
        let url = self.endpoints.url(endpoint);
        let query = document.to_string();
        let response: GraphResponse = self
            .post(url, &GraphRequest { query: &query }, self.retry.clone())
            .await?;
        response.into_data()
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        retry_with(&config, url, || self.do_request::<T, B>(url, body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let mut req = self.client.post(url).json(body);

        if let Some(key) = self.api_key.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            408 => Err(HttpError::Timeout),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl GraphTransport for GraphHttp {
    async fn query(
        &self,
        endpoint: Endpoint,
        document: &Document,
    ) -> Result<Map<String, Value>, HttpError> {
        self.execute(endpoint, document).await
    }
}

impl Clone for GraphHttp {
    fn clone(&self) -> Self {
        Self {
            endpoints: self.endpoints.clone(),
            client: self.client.clone(),
            retry: self.retry.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

impl std::fmt::Debug for GraphHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHttp")
            .field("endpoints", &self.endpoints)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// `Retry-After` in delta-seconds form. HTTP-date values and delays too large
/// to express in milliseconds are ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|s| s.checked_mul(1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DEFAULT_BLOCKS_URL, DEFAULT_DEX_URL, DEFAULT_INDEX_NODE_URL};

    #[test]
    fn test_graph_response_data() {
        let resp: GraphResponse = serde_json::from_str(
            r#"{"data":{"t100":[{"number":"5"}],"t700":[]}}"#,
        )
        .unwrap();
        let data = resp.into_data().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.contains_key("t100"));
    }

    #[test]
    fn test_graph_response_errors_fail_query() {
        let resp: GraphResponse = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"indexing_error"},{"message":"block not found"}]}"#,
        )
        .unwrap();
        let err = resp.into_data().unwrap_err();
        match err {
            HttpError::Query(msg) => assert_eq!(msg, "indexing_error; block not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_graph_response_missing_data_is_empty() {
        let resp: GraphResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_data().unwrap().is_empty());
    }

    #[test]
    fn test_endpoints_from_config() {
        let config = ChartConfig {
            dex_url: "https://example.org/subgraphs/name/sushi/exchange/".to_string(),
            ..ChartConfig::default()
        };
        let endpoints = Endpoints::from(&config);
        assert_eq!(
            endpoints.url(Endpoint::Dex),
            "https://example.org/subgraphs/name/sushi/exchange"
        );
        assert_eq!(endpoints.url(Endpoint::Blocks), DEFAULT_BLOCKS_URL);
        assert_eq!(endpoints.url(Endpoint::IndexNode), DEFAULT_INDEX_NODE_URL);
        assert_ne!(endpoints.url(Endpoint::Dex), DEFAULT_DEX_URL);
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after_ms("3"), Some(3000));
        assert_eq!(parse_retry_after_ms("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }

    #[test]
    fn test_parse_retry_after_overflow_is_ignored() {
        assert_eq!(parse_retry_after_ms("18446744073709552"), None);
        assert_eq!(parse_retry_after_ms(&u64::MAX.to_string()), None);
        assert_eq!(parse_retry_after_ms("31536000"), Some(31_536_000_000));
    }

    #[test]
    fn test_api_key_lifecycle() {
        let http = GraphHttp::new(Endpoints::from(&ChartConfig::default()), None).unwrap();
        tokio_test::block_on(async {
            assert!(!http.has_api_key().await);
            http.set_api_key(Some("key".to_string())).await;
            assert!(http.has_api_key().await);
            http.clear_api_key().await;
            assert!(!http.has_api_key().await);
        });
    }
}
