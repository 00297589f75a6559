//! Gateway configuration types.
//!
//! Configuration has serde defaults for every field and can be overlaid from
//! environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LISTEN_ADDR` | `listen_addr` |
//! | `CORS_ORIGINS` | `cors_origins` (comma separated) |
//! | `REQUEST_TIMEOUT_SECONDS` | `request_timeout_seconds` |
//! | `SERVICE_NAME` | `service_name` |
//! | `DATA_PATH` | `data_path` |

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:8001").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins. `"*"` allows any origin.
    #[serde(default = "GatewayConfig::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds.
    #[serde(default = "GatewayConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Service name reported by the health endpoint.
    #[serde(default = "GatewayConfig::default_service_name")]
    pub service_name: String,

    /// Dataset file to serve. The compiled-in sample is used when unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:8001".to_string()
    }

    fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    fn default_service_name() -> String {
        "LLM Tracing API".to_string()
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Build a configuration from defaults overlaid with environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults overlaid with values from `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(raw) = lookup("REQUEST_TIMEOUT_SECONDS") {
            config.request_timeout_seconds =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECONDS",
                    value: raw.clone(),
                })?;
        }

        if let Some(name) = lookup("SERVICE_NAME") {
            config.service_name = name;
        }

        if let Some(path) = lookup("DATA_PATH").filter(|p| !p.is_empty()) {
            config.data_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            cors_origins: Self::default_cors_origins(),
            request_timeout_seconds: Self::default_request_timeout(),
            service_name: Self::default_service_name(),
            data_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8001");
        assert_eq!(config.cors_origins, ["*"]);
        assert_eq!(config.service_name, "LLM Tracing API");
        assert!(config.data_path.is_none());
    }

    #[test]
    fn timeout_duration() {
        let config = GatewayConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_overrides() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("CORS_ORIGINS", "http://localhost:3000, https://oracle.example.com,"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("DATA_PATH", "/srv/oracle/data.json"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(
            config.cors_origins,
            ["http://localhost:3000", "https://oracle.example.com"]
        );
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(
            config.data_path.as_deref(),
            Some(std::path::Path::new("/srv/oracle/data.json"))
        );
    }

    #[test]
    fn invalid_timeout() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECONDS",
                ..
            })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"listen_addr": "127.0.0.1:8080"}"#).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.cors_origins, ["*"]);
    }
}
