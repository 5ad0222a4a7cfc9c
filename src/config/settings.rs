//! Server settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Address the server binds to when `ESTIMATOR_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, compact lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
    /// Directory of YAML pricing tables; the embedded tables are used when `None`.
    pub config_dir: Option<PathBuf>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ServerSettings {
    /// Reads settings from `ESTIMATOR_BIND_ADDR`, `ESTIMATOR_CONFIG_DIR` and
    /// `ESTIMATOR_LOG_FORMAT`.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw =
            lookup("ESTIMATOR_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| EngineError::InvalidConfig {
                message: format!("ESTIMATOR_BIND_ADDR is not a socket address: {}", bind_addr_raw),
            })?;

        let config_dir = lookup("ESTIMATOR_CONFIG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("ESTIMATOR_LOG_FORMAT")
            .map(|f| f.to_ascii_lowercase())
            .as_deref()
        {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(EngineError::InvalidConfig {
                    message: format!("ESTIMATOR_LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
                });
            }
        };

        Ok(Self {
            bind_addr,
            config_dir,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(settings.config_dir, None);
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_values_are_read() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            ("ESTIMATOR_BIND_ADDR", "127.0.0.1:8080"),
            ("ESTIMATOR_CONFIG_DIR", "./config/standard"),
            ("ESTIMATOR_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(settings.config_dir, Some(PathBuf::from("./config/standard")));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_config_dir_means_embedded_tables() {
        let settings =
            ServerSettings::from_lookup(lookup_from(&[("ESTIMATOR_CONFIG_DIR", "  ")])).unwrap();
        assert_eq!(settings.config_dir, None);
    }

    #[test]
    fn test_bad_bind_addr_is_rejected() {
        let result = ServerSettings::from_lookup(lookup_from(&[("ESTIMATOR_BIND_ADDR", "nowhere")]));
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = ServerSettings::from_lookup(lookup_from(&[("ESTIMATOR_LOG_FORMAT", "xml")]));
        match result {
            Err(EngineError::InvalidConfig { message }) => assert!(message.contains("xml")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
