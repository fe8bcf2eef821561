use rust_decimal::Decimal;
use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DISCOUNT_RATE: &str = "0.10";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Bearer token granting access to admin endpoints; admin access is disabled when unset.
    pub admin_token: Option<String>,

    /// Fraction taken off a stay when any discount code is supplied.
    pub discount_rate: Decimal,

    pub request_timeout: Duration,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discount_rate = optional_var("DISCOUNT_RATE")
            .unwrap_or_else(|| DEFAULT_DISCOUNT_RATE.to_string());
        let discount_rate = Decimal::from_str(&discount_rate)
            .ok()
            .filter(|rate| *rate >= Decimal::ZERO && *rate < Decimal::ONE)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "DISCOUNT_RATE".to_string(),
                value: discount_rate.clone(),
                reason: "expected a decimal in [0, 1)".to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            admin_token: optional_var("ADMIN_TOKEN"),
            discount_rate,
            request_timeout: Duration::from_secs(seconds_var(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            db_acquire_timeout: Duration::from_secs(seconds_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
            )?),
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads a positive number of seconds, falling back to `default` when unset.
fn seconds_var(name: &str, default: u64) -> Result<u64, ConfigError> {
    let Some(value) = optional_var(name) else {
        return Ok(default);
    };

    value
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "expected a positive number of seconds".to_string(),
        })
}
