//! Configuration for the roster registry and its CLI

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Registry limits. Both are unlimited by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of teams the registry accepts
    pub max_teams: Option<usize>,

    /// Maximum number of players a single team may hold
    pub max_players_per_team: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            max_teams: parse_limit("ROSTER_MAX_TEAMS")?,
            max_players_per_team: parse_limit("ROSTER_MAX_PLAYERS_PER_TEAM")?,
        })
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("ROSTER_LOG_LEVEL") {
            config.level = level;
        }

        if let Ok(format) = std::env::var("ROSTER_LOG_FORMAT") {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate level and format
    pub fn validate(&self) -> Result<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow!("Invalid log level: {}", self.level)),
        }

        match self.format.as_str() {
            "json" | "pretty" => {}
            _ => return Err(anyhow!("Invalid log format: {}", self.format)),
        }

        Ok(())
    }
}

fn parse_limit(var: &str) -> Result<Option<usize>> {
    match std::env::var(var) {
        Ok(raw) => {
            let limit = raw.parse::<usize>().with_context(|| format!("Invalid {var}: {raw}"))?;
            Ok(Some(limit))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unlimited() {
        let config = RegistryConfig::default();
        assert_eq!(config.max_teams, None);
        assert_eq!(config.max_players_per_team, None);
    }

    #[test]
    fn test_logging_validation() {
        assert!(LoggingConfig::default().validate().is_ok());

        let bad_level = LoggingConfig { level: "loud".to_string(), format: "pretty".to_string() };
        assert!(bad_level.validate().is_err());

        let bad_format = LoggingConfig { level: "info".to_string(), format: "xml".to_string() };
        assert!(bad_format.validate().is_err());
    }
}
