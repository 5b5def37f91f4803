//! Exchange connection configuration.
//!
//! These types are deserialized from the application's settings file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration for the futures exchange connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Use the simulated-funds environment instead of production
    #[serde(default = "default_testnet")]
    pub testnet: bool,
    /// REST API configuration
    #[serde(default)]
    pub rest: RestConfig,
    /// Credential source
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_testnet() -> bool {
    true
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            testnet: default_testnet(),
            rest: RestConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl ExchangeConfig {
    /// Testnet configuration with defaults.
    pub fn testnet() -> Self {
        Self::default()
    }

    /// Production configuration with defaults.
    pub fn production() -> Self {
        Self {
            testnet: false,
            ..Self::default()
        }
    }

    /// Human readable environment name.
    pub fn environment_name(&self) -> &'static str {
        if self.testnet {
            "Testnet"
        } else {
            "Live"
        }
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base URL override (empty = derive from environment)
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Receive window in milliseconds (for timestamp validation)
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_recv_window_ms() -> u64 {
    5_000
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
            recv_window_ms: default_recv_window_ms(),
        }
    }
}

impl RestConfig {
    /// Returns the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Where API credentials come from.
///
/// API keys are loaded from environment variables, never from the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Environment variable name for API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Environment variable name for API secret
    #[serde(default = "default_api_secret_env")]
    pub api_secret_env: String,
}

fn default_api_key_env() -> String {
    "BINANCE_API_KEY".to_string()
}

fn default_api_secret_env() -> String {
    "BINANCE_API_SECRET".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            api_secret_env: default_api_secret_env(),
        }
    }
}

impl AuthConfig {
    /// Create a new auth config with environment variable names.
    pub fn new(api_key_env: impl Into<String>, api_secret_env: impl Into<String>) -> Self {
        Self {
            api_key_env: api_key_env.into(),
            api_secret_env: api_secret_env.into(),
        }
    }
}

/// API key / secret pair.
///
/// Values may be empty; the gateway validates them before building a client.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read credentials from the environment variables named in `auth`.
    /// Unset variables yield empty strings.
    pub fn from_env(auth: &AuthConfig) -> Self {
        Self {
            api_key: std::env::var(&auth.api_key_env).unwrap_or_default(),
            api_secret: std::env::var(&auth.api_secret_env).unwrap_or_default(),
        }
    }

    /// Names of the missing credential fields, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("API key");
        }
        if self.api_secret.trim().is_empty() {
            missing.push("API secret");
        }
        missing
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &"***")
            .finish()
    }
}

fn redact(key: &str) -> String {
    match key.chars().count() {
        0 => String::new(),
        n if n <= 8 => "***".to_string(),
        _ => format!("{}***", key.chars().take(4).collect::<String>()),
    }
}
