//! Seed configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_infra::DatabaseConfig;

/// Seed configuration.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub seed_file: PathBuf,
    pub json_logs: bool,
    pub database: Option<DatabaseConfig>,
}

impl SeedConfig {
    /// Load configuration from environment variables. A positional argument,
    /// when given, overrides `SEED_FILE`.
    pub fn from_env(arg: Option<String>) -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        let seed_file = arg
            .or_else(|| env::var("SEED_FILE").ok())
            .unwrap_or_else(|| "seed.json".to_string());

        Self {
            seed_file: PathBuf::from(seed_file),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            database,
        }
    }
}
