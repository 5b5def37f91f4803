//! Logging configuration and initialization.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::time::{ChronoLocal, ChronoUtc, FormatTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";

/// Logging setup failures.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Timestamp format for log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// Local time with timezone (default)
    #[default]
    Local,
    /// UTC time (ISO 8601)
    Utc,
    /// No timestamps
    None,
}

impl TimestampFormat {
    /// Parse format from string
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "utc" => TimestampFormat::Utc,
            "none" | "off" => TimestampFormat::None,
            _ => TimestampFormat::Local,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Timestamp format
    pub timestamps: TimestampFormat,
    /// Default log level filter
    pub default_level: String,
    /// Include source file location
    pub include_location: bool,
    /// Include target (module path)
    pub include_target: bool,
    /// Append-only log file; `None` logs to the console only
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            timestamps: TimestampFormat::Local,
            default_level: "info".to_string(),
            include_location: false,
            include_target: true,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl LogConfig {
    /// Create config from environment variables
    ///
    /// Reads `LOG_TIMESTAMPS`, `LOG_LEVEL` (fallback if `RUST_LOG` is not
    /// set), `LOG_LOCATION` and `LOG_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            timestamps: lookup("LOG_TIMESTAMPS")
                .map(|s| TimestampFormat::parse(&s))
                .unwrap_or_default(),
            default_level: lookup("LOG_LEVEL").unwrap_or(defaults.default_level),
            include_location: lookup("LOG_LOCATION")
                .map(|s| s == "true" || s == "1")
                .unwrap_or(defaults.include_location),
            include_target: defaults.include_target,
            log_file: match lookup("LOG_FILE") {
                Some(path) if path.eq_ignore_ascii_case("none") || path.is_empty() => None,
                Some(path) => Some(PathBuf::from(path)),
                None => defaults.log_file,
            },
        }
    }

    /// Set the default log level
    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Set (or clear) the log file
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize logging with the given configuration
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: LogConfig) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    match config.timestamps {
        TimestampFormat::Local => install(
            &config,
            env_filter,
            ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f %z".to_string()),
        ),
        TimestampFormat::Utc => install(
            &config,
            env_filter,
            ChronoUtc::new("%Y-%m-%dT%H:%M:%S%.3fZ".to_string()),
        ),
        TimestampFormat::None => install(&config, env_filter, ()),
    }
}

/// Install the console layer and, when configured, the file layer.
fn install<T>(config: &LogConfig, env_filter: EnvFilter, timer: T) -> Result<(), LoggingError>
where
    T: FormatTime + Clone + Send + Sync + 'static,
{
    let console = fmt::layer()
        .with_target(config.include_target)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(io::stdout().is_terminal())
        .with_timer(timer.clone());

    let file = match &config.log_file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File {
                    path: path.display().to_string(),
                    source,
                })?;

            Some(
                fmt::layer()
                    .with_target(config.include_target)
                    .with_file(config.include_location)
                    .with_line_number(config.include_location)
                    .with_ansi(false)
                    .with_timer(timer)
                    .with_writer(Mutex::new(handle)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
