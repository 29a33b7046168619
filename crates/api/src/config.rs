//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the clinic booking API.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `ADMIN_TOKEN`: Bearer token required by the admin endpoints
//! - `SLOT_WIDTH_MINUTES`: Granularity of bookable slots (default: 30)
//! - `BOOKING_LEAD_MINUTES`: Hide slots starting sooner than this from now (default: unset)

use eyre::{Result, WrapErr, eyre};
use osteo_core::slots::{DEFAULT_SLOT_WIDTH_MINUTES, MAX_SLOT_WIDTH_MINUTES};
use std::env;
use tracing::Level;

/// Configuration for the booking API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Booking rules shared with the request handlers
    pub booking: BookingSettings,
}

/// Settings the handlers consult on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSettings {
    pub slot_width_minutes: u32,

    /// Minimum notice for a booking. `None` offers every remaining slot of today,
    /// including ones that already started.
    pub lead_minutes: Option<u32>,

    /// Without a token the admin endpoints refuse every request.
    pub admin_token: Option<String>,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            slot_width_minutes: DEFAULT_SLOT_WIDTH_MINUTES,
            lead_minutes: None,
            admin_token: None,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - SLOT_WIDTH_MINUTES is not an integer between 1 and 1440
    /// - BOOKING_LEAD_MINUTES is set but not an integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking settings
        let slot_width_minutes: u32 = match lookup("SLOT_WIDTH_MINUTES") {
            Some(raw) => raw.parse().wrap_err("Invalid SLOT_WIDTH_MINUTES value")?,
            None => DEFAULT_SLOT_WIDTH_MINUTES,
        };
        if slot_width_minutes == 0 || slot_width_minutes > MAX_SLOT_WIDTH_MINUTES {
            return Err(eyre!(
                "SLOT_WIDTH_MINUTES must be between 1 and {}, got {}",
                MAX_SLOT_WIDTH_MINUTES,
                slot_width_minutes
            ));
        }

        let lead_minutes: Option<u32> = lookup("BOOKING_LEAD_MINUTES")
            .map(|raw| raw.parse().wrap_err("Invalid BOOKING_LEAD_MINUTES value"))
            .transpose()?;

        let admin_token = lookup("ADMIN_TOKEN").filter(|token| !token.trim().is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            booking: BookingSettings {
                slot_width_minutes,
                lead_minutes,
                admin_token,
            },
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
