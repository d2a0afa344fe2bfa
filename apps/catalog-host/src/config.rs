//! Command host configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Filter used when neither `RUST_LOG` nor `CATALOG_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,catalog=debug";

/// Longest request line accepted by default (64 KiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024;

/// Command host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    pub log_filter: String,

    /// Colour codes in log output
    pub log_ansi: bool,

    /// Request lines longer than this are rejected without being decoded
    pub max_line_bytes: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: false,
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl HostConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = HostConfig::default();

        let config = HostConfig {
            log_filter: lookup("CATALOG_LOG_FILTER").unwrap_or(defaults.log_filter),

            log_ansi: match lookup("CATALOG_LOG_ANSI") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CATALOG_LOG_ANSI".to_string()))?,
                None => defaults.log_ansi,
            },

            max_line_bytes: match lookup("CATALOG_MAX_LINE_BYTES") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CATALOG_MAX_LINE_BYTES".to_string()))?,
                None => defaults.max_line_bytes,
            },
        };

        if config.max_line_bytes == 0 {
            return Err(ConfigError::InvalidValue("CATALOG_MAX_LINE_BYTES".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = HostConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.max_line_bytes, 65_536);
    }

    #[test]
    fn test_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("CATALOG_LOG_FILTER", "warn"),
            ("CATALOG_LOG_ANSI", "true"),
            ("CATALOG_MAX_LINE_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert!(config.log_ansi);
        assert_eq!(config.max_line_bytes, 1024);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = HostConfig::from_lookup(lookup_from(&[("CATALOG_MAX_LINE_BYTES", "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CATALOG_MAX_LINE_BYTES");

        assert!(HostConfig::from_lookup(lookup_from(&[("CATALOG_MAX_LINE_BYTES", "0")])).is_err());
        assert!(HostConfig::from_lookup(lookup_from(&[("CATALOG_LOG_ANSI", "yes")])).is_err());
    }
}
