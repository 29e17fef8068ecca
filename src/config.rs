//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//! - `JWT_SECRET` - signing secret for bearer tokens; must be non-empty
//!
//! ## Optional Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - public base for short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - log filter (default: `info`)
//! - `CACHE_ENABLED` - in-process redirect cache toggle (default: `true`)
//! - `CACHE_CAPACITY` - max cached mappings (default: 10000)
//! - `CACHE_TTL_SECONDS` - cached mapping lifetime (default: 3600)
//! - `DB_MAX_CONNECTIONS` - connection pool size (default: 10)

use anyhow::{Context, Result, ensure};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base for short URLs, without a trailing slash requirement.
    pub base_url: String,
    /// Signing secret for bearer tokens.
    pub jwt_secret: String,
    pub cache_enabled: bool,
    pub cache_capacity: u64,
    /// TTL (seconds) for cached URL mappings.
    pub cache_ttl_seconds: u64,
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        ensure!(!jwt_secret.trim().is_empty(), "JWT_SECRET must be non-empty");

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3_600);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            jwt_secret,
            cache_enabled,
            cache_capacity,
            cache_ttl_seconds,
            db_max_connections,
        })
    }
}
