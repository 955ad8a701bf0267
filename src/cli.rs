//! Command-line interface parsing for the airports service
//!
//! This module handles parsing of CLI arguments using clap. Every option can
//! also be supplied through an `AIRPORTS_*` environment variable.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::upstream::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL};

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The upstream URL is not an http(s) URL
    #[error("Invalid upstream URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidUpstreamUrl(String),

    /// The request timeout must be positive
    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,
}

/// Airports API - filterable airport reference data
#[derive(Parser, Debug)]
#[command(name = "airports")]
#[command(about = "Serves a filterable, flattened view of upstream airport reference data")]
#[command(version)]
pub struct Cli {
    /// Upstream endpoint returning the full airport list as JSON
    #[arg(long, env = "AIRPORTS_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "AIRPORTS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Upstream request timeout in seconds
    #[arg(long, env = "AIRPORTS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long, env = "AIRPORTS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub upstream_url: String,
    pub bind: SocketAddr,
    pub timeout: Duration,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the URL or timeout is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let url = cli.upstream_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CliError::InvalidUpstreamUrl(cli.upstream_url.clone()));
        }
        if cli.timeout_secs == 0 {
            return Err(CliError::InvalidTimeout);
        }

        Ok(StartupConfig {
            upstream_url: url.to_string(),
            bind: cli.bind,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}
