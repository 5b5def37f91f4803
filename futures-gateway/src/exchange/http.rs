//! Authenticated HTTP client for the futures REST API.
//!
//! Handles request signing via [`RequestSigner`], the request timeout and
//! decoding of exchange error bodies. There is no retry and no rate limiting:
//! every call is exactly one request.

use std::sync::Arc;

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::config::RestConfig;
use super::error::{ExchangeError, ExchangeResult};

/// Signs request parameters for authenticated endpoints.
pub trait RequestSigner: Send + Sync {
    /// Append the timestamp and signature to `params`.
    fn sign(&self, params: &mut Vec<(String, String)>, timestamp: u64) -> ExchangeResult<()>;

    /// Header name carrying the API key.
    fn api_key_header(&self) -> &str;

    /// The API key.
    fn api_key(&self) -> &str;
}

/// Join parameters as `k1=v1&k2=v2`, preserving order.
///
/// Values are used verbatim; symbols, enums and decimals never need escaping.
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP client for the futures REST API.
///
/// # Example
///
/// ```ignore
/// let signer = BinanceHmacSigner::new(api_key, api_secret);
/// let client = HttpClient::new("https://testnet.binancefuture.com", Box::new(signer), RestConfig::default())?;
///
/// let orders: Vec<OrderRecord> = client
///     .get_signed("/fapi/v1/openOrders", &[("symbol", "BTCUSDT")])
///     .await?;
/// ```
pub struct HttpClient {
    client: Client,
    base_url: String,
    signer: Arc<dyn RequestSigner>,
    config: RestConfig,
}

impl HttpClient {
    /// Create a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for all requests (e.g., "https://fapi.binance.com")
    /// * `signer` - Request signer for authentication
    /// * `config` - REST configuration (timeout, receive window)
    pub fn new(
        base_url: impl Into<String>,
        signer: Box<dyn RequestSigner>,
        config: RestConfig,
    ) -> ExchangeResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ExchangeError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            signer: Arc::from(signer),
            config,
        })
    }

    fn timestamp_ms() -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }

    fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let base = format!("{}{}", self.base_url, endpoint);
        if params.is_empty() {
            base
        } else {
            format!("{}?{}", base, build_query_string(params))
        }
    }

    /// Add `recvWindow` (unless present), then sign.
    fn sign_params(&self, params: &[(&str, &str)]) -> ExchangeResult<Vec<(String, String)>> {
        let mut signed_params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        if !signed_params.iter().any(|(k, _)| k == "recvWindow") {
            signed_params.push((
                "recvWindow".to_string(),
                self.config.recv_window_ms.to_string(),
            ));
        }

        self.signer.sign(&mut signed_params, Self::timestamp_ms())?;
        Ok(signed_params)
    }

    fn build_auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();

        if let (Ok(name), Ok(value)) = (
            header::HeaderName::from_bytes(self.signer.api_key_header().as_bytes()),
            header::HeaderValue::from_str(self.signer.api_key()),
        ) {
            headers.insert(name, value);
        }

        headers
    }

    /// Make a public (unsigned) GET request.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> ExchangeResult<T> {
        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let url = self.build_url(endpoint, &params);

        debug!("GET (public) {}", url);

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a signed GET request.
    pub async fn get_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> ExchangeResult<T> {
        let signed_params = self.sign_params(params)?;
        let url = self.build_url(endpoint, &signed_params);

        debug!("GET (signed) {}", endpoint);

        let response = self
            .client
            .get(&url)
            .headers(self.build_auth_headers())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a signed POST request; parameters go in the form body.
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> ExchangeResult<T> {
        let signed_params = self.sign_params(params)?;
        let body = build_query_string(&signed_params);

        debug!("POST (signed) {}", endpoint);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .headers(self.build_auth_headers())
            .body(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a signed DELETE request.
    pub async fn delete_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> ExchangeResult<T> {
        let signed_params = self.sign_params(params)?;
        let url = self.build_url(endpoint, &signed_params);

        debug!("DELETE (signed) {}", endpoint);

        let response = self
            .client
            .delete(&url)
            .headers(self.build_auth_headers())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> ExchangeResult<T> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Request(format!("Failed to read response: {}", e)))?;

        decode_body(status, &body)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Binance error body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: i32,
    msg: String,
}

/// Turn a status code and body into a typed result.
///
/// Non-success statuses with a `{code, msg}` body become [`ExchangeError::Api`];
/// any other non-success body becomes [`ExchangeError::Request`].
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> ExchangeResult<T> {
    if !(200..300).contains(&status) {
        if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
            return Err(ExchangeError::api(status, error.code, error.msg));
        }
        return Err(ExchangeError::Request(format!("HTTP {}: {}", status, body)));
    }

    serde_json::from_str(body).map_err(|e| {
        ExchangeError::Parse(format!("Failed to parse response: {} - body: {}", e, body))
    })
}
