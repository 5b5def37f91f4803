//! Logging setup shared by the front ends.
//!
//! Every event goes to the console and is appended to a log file
//! (default `trading_bot.log`).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Standard tracing filter (e.g., `info`, `futures_gateway=debug`)
//! - `LOG_LEVEL`: Default level when `RUST_LOG` is not set
//! - `LOG_TIMESTAMPS`: Timestamp format - `local` (default), `utc`, or `none`
//! - `LOG_LOCATION`: `true`/`1` to include file:line
//! - `LOG_FILE`: Log file path, or `none` to disable the file sink
//!
//! # Usage
//!
//! ```rust,ignore
//! use futures_gateway::logging::{init_logging, LogConfig};
//!
//! init_logging(LogConfig::from_env())?;
//! ```

mod config;

pub use config::{init_logging, LogConfig, LoggingError, TimestampFormat, DEFAULT_LOG_FILE};
