//! API configuration
//!
//! Values come from, in increasing precedence: built-in defaults, a `.env`
//! file (loaded by the binary), and `API_*` environment variables. Nested
//! labor settings use a double underscore, e.g. `API_LABOR__MINIMUM_WAGE`.

use std::time::Duration;

use domain_employee::LaborRulesConfig;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Upper bound on a single request, including its transaction
    pub request_timeout_secs: u64,
    /// Labor rules of the deployment's jurisdiction
    pub labor: LaborRulesConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/employees".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 10,
            labor: LaborRulesConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
