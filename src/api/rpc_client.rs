use crate::api::networks::{Network, SuiNetwork};
use crate::api::transport::Transport;
use crate::api::types::JsonRpcRequest;
use crate::error::TransportError;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::*;
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, TransportError>;

/// Settings for [`HttpTransport::with_config`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct HttpTransportConfig {
    /// Full node JSON-RPC endpoint.
    #[builder(setter(into))]
    pub url: String,

    /// Whole-request timeout, from connecting until the body has been read.
    #[builder(default, setter(strip_option))]
    pub timeout: Option<Duration>,

    /// Extra headers sent with every request, e.g. an API key for a hosted node.
    #[builder(default)]
    pub headers: HeaderMap,
}

/// JSON-RPC 2.0 over HTTP POST.
pub struct HttpTransport {
    url: String,
    request_id: AtomicU64,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_id: Self::new_request_id(),
            http: reqwest::Client::new(),
        }
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(SuiNetwork::from(network).rpc_url)
    }

    /// Builds a transport with a dedicated [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// * [`TransportError::Network`] if the HTTP client can't be initialized (e.g. TLS backend failure).
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().default_headers(config.headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: config.url,
            request_id: Self::new_request_id(),
            http: builder.build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends a POST request to the full node and returns the raw response body.
    ///
    /// # Arguments
    ///
    /// * `method` - JSON-RPC method
    /// * `params` - JSON-RPC positional params
    ///
    /// # Errors
    ///
    /// * [`TransportError::Network`] if the request can't be delivered or the body can't be read.
    /// * [`TransportError::Status`] if the node answers with a non-2xx status.
    pub async fn post(&self, method: &str, params: &[Value]) -> Result<Vec<u8>> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        trace!(request = %serde_json::to_string(&body)?);

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        trace!(%status, response = %String::from_utf8_lossy(&bytes));

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }

    // Pseudo-random number to avoid collisions between requests coming from different instances of this client.
    // It doesn't need to be cryptographically secure, so it's not worth adding a dependency for it.
    fn new_request_id() -> AtomicU64 {
        AtomicU64::new(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() % 1_000_000)
                .unwrap_or_default() as u64,
        )
    }
}

impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Vec<u8>> {
        self.post(method, &params).await
    }
}
