//! # Client Configuration Module
//!
//! Loads the dashboard client configuration from environment variables,
//! providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `PARKVIEW_API_URL`: Base URL of the parking backend REST API (required)
//! - `PARKVIEW_WS_URL`: Push-channel WebSocket URL (default: API URL with a
//!   ws scheme and `/ws` path)
//! - `PARKVIEW_EMAIL` / `PARKVIEW_PASSWORD`: Login credentials (optional)
//! - `PARKVIEW_ADMIN`: Treat the session as an admin session (default: false)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `PARKVIEW_REQUEST_TIMEOUT_SECONDS`: HTTP request timeout (default: 30)
//! - `PARKVIEW_MAX_INTERVALS`: Picker interval-count limit (default: 3)
//! - `PARKVIEW_MAX_RESERVATION_HOURS`: Picker hour budget (default: 8)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

use parkview_core::picker::PickerLimits;

/// Configuration for the Parkview dashboard client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend REST API (e.g. "http://localhost:8080/api")
    pub api_url: String,

    /// WebSocket URL of the push channel
    pub ws_url: String,

    /// Login email (optional; without credentials the client is anonymous)
    pub email: Option<String>,

    /// Login password (optional)
    pub password: Option<String>,

    /// Whether the session acts with admin privileges
    pub admin: bool,

    /// Log level for the application
    pub log_level: Level,

    /// HTTP request timeout in seconds
    pub request_timeout: u64,

    /// Maximum number of intervals per reservation session
    pub max_intervals: usize,

    /// Maximum total reservation hours per session
    pub max_reservation_hours: f64,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PARKVIEW_API_URL` is not set or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("PARKVIEW_API_URL")
            .wrap_err("PARKVIEW_API_URL environment variable must be set")?;

        let ws_url =
            env::var("PARKVIEW_WS_URL").unwrap_or_else(|_| Self::default_ws_url(&api_url));

        let email = env::var("PARKVIEW_EMAIL").ok();
        let password = env::var("PARKVIEW_PASSWORD").ok();

        let admin = env::var("PARKVIEW_ADMIN")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = env::var("PARKVIEW_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let max_intervals = env::var("PARKVIEW_MAX_INTERVALS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .wrap_err("PARKVIEW_MAX_INTERVALS must be an integer")?;

        let max_reservation_hours = env::var("PARKVIEW_MAX_RESERVATION_HOURS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .wrap_err("PARKVIEW_MAX_RESERVATION_HOURS must be a number")?;

        Ok(Self {
            api_url,
            ws_url,
            email,
            password,
            admin,
            log_level,
            request_timeout,
            max_intervals,
            max_reservation_hours,
        })
    }

    /// The picker capacity limits configured for this client.
    pub fn picker_limits(&self) -> PickerLimits {
        PickerLimits {
            max_intervals: self.max_intervals,
            max_hours: self.max_reservation_hours,
        }
    }

    /// Derive the push-channel URL from the API base URL: swap the scheme to
    /// its ws counterpart and append `/ws`.
    pub fn default_ws_url(api_url: &str) -> String {
        let base = api_url.trim_end_matches('/');
        let base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{base}/ws")
    }
}
