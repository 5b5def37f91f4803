//! Application settings and configuration

use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use futures_gateway::ExchangeConfig;
use serde::{Deserialize, Serialize};

/// Settings file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";

/// Environment variable prefix (e.g. `FUTURES__DASHBOARD__BIND`).
pub const ENV_PREFIX: &str = "FUTURES";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Exchange connection
    #[serde(default)]
    pub exchange: ExchangeConfig,
    /// Web dashboard
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Web dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Pause before re-reading open orders after a cancel
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
    /// Trading pairs offered on the order form
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

fn default_symbols() -> Vec<String> {
    ["BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            refresh_delay_ms: default_refresh_delay_ms(),
            symbols: default_symbols(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file and environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::build(Config::builder().add_source(file))
    }

    /// Parse settings from TOML text, then apply environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Apply the `--live` command-line switch.
    pub fn with_live(mut self, live: bool) -> Self {
        if live {
            self.exchange.testnet = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.exchange.testnet);
        assert_eq!(settings.exchange.rest.timeout_ms, 10_000);
        assert_eq!(settings.dashboard.bind, "127.0.0.1:8080");
        assert_eq!(settings.dashboard.refresh_delay_ms, 1000);
        assert_eq!(
            settings.dashboard.symbols,
            vec!["BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT"]
        );
    }

    #[test]
    fn test_from_toml_str() {
        let settings = Settings::from_toml_str(
            r#"
            [exchange]
            testnet = false

            [exchange.rest]
            timeout_ms = 2500

            [dashboard]
            bind = "0.0.0.0:9000"
            symbols = ["BTCUSDT"]
            "#,
        )
        .unwrap();

        assert!(!settings.exchange.testnet);
        assert_eq!(settings.exchange.rest.timeout_ms, 2500);
        assert_eq!(settings.exchange.auth.api_key_env, "BINANCE_API_KEY");
        assert_eq!(settings.dashboard.bind, "0.0.0.0:9000");
        assert_eq!(settings.dashboard.refresh_delay_ms, 1000);
        assert_eq!(settings.dashboard.symbols, vec!["BTCUSDT"]);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert!(settings.exchange.testnet);
        assert_eq!(settings.dashboard.symbols.len(), 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/futures.toml"))).is_err());
    }

    #[test]
    fn test_live_switch() {
        assert!(!Settings::default().with_live(true).exchange.testnet);
        assert!(Settings::default().with_live(false).exchange.testnet);
    }
}
