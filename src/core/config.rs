//! Logger configuration

use super::error::{LoggerError, Result};
use super::log_level::{level_rank, INVALID_RANK};
use serde::{Deserialize, Serialize};

/// Configuration options for a [`Logger`](super::Logger).
///
/// The level is kept as a name so the value can come straight from a config
/// file or the environment; it is resolved to a rank when the logger is built.
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub prefix: String,
    pub log_level: String,
    pub add_timestamp: bool,
}

impl LoggerConfig {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, add_timestamp: bool) -> Self {
        self.add_timestamp = add_timestamp;
        self
    }

    /// Check that `log_level` names a known level.
    ///
    /// Constructing a logger never calls this; an unknown level there produces
    /// a logger that writes nothing. Call it up front to catch the mistake.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_module_logger::LoggerConfig;
    ///
    /// assert!(LoggerConfig::default().validate().is_ok());
    /// assert!(LoggerConfig::default().with_log_level("LOUD").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if level_rank(&self.log_level) == INVALID_RANK {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("log_level '{}' is not recognized", self.log_level),
            ));
        }
        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: "service".to_string(),
            log_level: "INFO".to_string(),
            add_timestamp: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.prefix, "service");
        assert_eq!(config.log_level, "INFO");
        assert!(config.add_timestamp);
    }

    #[test]
    fn test_builder_helpers() {
        let config = LoggerConfig::default()
            .with_prefix("svc")
            .with_log_level("warn")
            .with_timestamp(false);
        assert_eq!(config.prefix, "svc");
        assert_eq!(config.log_level, "warn");
        assert!(!config.add_timestamp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let err = LoggerConfig::default()
            .with_log_level("WARNING")
            .validate()
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("WARNING"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"prefix": "api", "add_timestamp": false}"#).unwrap();
        assert_eq!(config.prefix, "api");
        assert_eq!(config.log_level, "INFO");
        assert!(!config.add_timestamp);
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(LoggerConfig::default()).unwrap();
        assert_eq!(json["prefix"], "service");
        assert_eq!(json["log_level"], "INFO");
        assert_eq!(json["add_timestamp"], true);
    }
}
