//! HMAC-SHA256 request signing for the Binance futures API.
//!
//! Signing appends `timestamp`, then computes the HMAC-SHA256 of the full
//! query string with the API secret and appends it as `signature`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::error::{ExchangeError, ExchangeResult};
use super::http::{build_query_string, RequestSigner};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 request signer.
///
/// # Example
///
/// ```ignore
/// let signer = BinanceHmacSigner::new("api_key", "api_secret");
///
/// let mut params = vec![("symbol".to_string(), "BTCUSDT".to_string())];
/// signer.sign(&mut params, 1499827319559)?;
///
/// // params now ends with timestamp and signature
/// ```
#[derive(Clone)]
pub struct BinanceHmacSigner {
    api_key: String,
    api_secret: String,
}

impl BinanceHmacSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Compute the hex encoded HMAC-SHA256 of `data`.
    fn compute_signature(&self, data: &str) -> ExchangeResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .map_err(|e| ExchangeError::Configuration(format!("Invalid API secret: {}", e)))?;
        mac.update(data.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl RequestSigner for BinanceHmacSigner {
    fn sign(&self, params: &mut Vec<(String, String)>, timestamp: u64) -> ExchangeResult<()> {
        params.push(("timestamp".to_string(), timestamp.to_string()));

        let query = build_query_string(params);
        let signature = self.compute_signature(&query)?;

        params.push(("signature".to_string(), signature));
        Ok(())
    }

    fn api_key_header(&self) -> &str {
        "x-mbx-apikey"
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}
