//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Ledger presentation settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL (`postgres://...` or `sqlite://...`).
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a new connection to be established.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Seconds to wait for a pooled connection to become available.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    60
}

fn default_acquire_timeout() -> u64 {
    30
}

impl DatabaseConfig {
    /// Creates a configuration for `url` with default pool settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

/// Ledger presentation settings.
///
/// The placeholder period is shown by the monthly report view before the
/// user has picked a month.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LedgerConfig {
    /// Month shown by the empty monthly report.
    #[serde(default = "default_report_month")]
    pub default_report_month: u32,
    /// Year shown by the empty monthly report.
    #[serde(default = "default_report_year")]
    pub default_report_year: i32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_report_month: default_report_month(),
            default_report_year: default_report_year(),
        }
    }
}

fn default_report_month() -> u32 {
    1
}

fn default_report_year() -> i32 {
    2024
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `CAIXA__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAIXA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("CAIXA__DATABASE__URL", Some("sqlite::memory:")),
                ("CAIXA__SERVER__PORT", Some("8081")),
                ("CAIXA__DATABASE__MAX_CONNECTIONS", Some("4")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.database.url, "sqlite::memory:");
                assert_eq!(config.database.max_connections, 4);
                assert_eq!(config.database.min_connections, 1);
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_vars_unset(["CAIXA__DATABASE__URL"], || {
            assert!(AppConfig::load().is_err());
        });
    }

    #[test]
    fn test_ledger_defaults() {
        let ledger = LedgerConfig::default();
        assert_eq!(ledger.default_report_month, 1);
        assert_eq!(ledger.default_report_year, 2024);
    }

    #[test]
    fn test_database_config_new_uses_pool_defaults() {
        let db = DatabaseConfig::new("postgres://localhost/caixa");
        assert_eq!(db.max_connections, 10);
        assert_eq!(db.connect_timeout_secs, 60);
        assert_eq!(db.acquire_timeout_secs, 30);
    }
}
