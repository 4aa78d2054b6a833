use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::series::SessionWindow;
use sprywarecsv::{parse_time_of_day, seconds_since_midnight};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Plot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Path to the SpryWare trades (prints) file
    pub trades_file: String,
    /// Path to the SpryWare quotes file
    pub quotes_file: String,

    /// Space prints evenly on the x axis instead of by wall time
    #[serde(default = "default_true")]
    pub uniform_time: bool,
    /// Connect print points with a line
    #[serde(default)]
    pub connect_trades: bool,
    /// Connect bid/offer points with lines
    #[serde(default)]
    pub connect_quotes: bool,

    /// Session time window; events outside it are ignored
    #[serde(default)]
    pub session: SessionConfig,
}

/// Time-of-day window for the plotted session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub start: String,
    pub end: String,
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: "9:30:00.000".to_string(),
            end: "11:00:00.000".to_string(),
        }
    }
}

impl SessionConfig {
    /// Resolve the configured strings into a seconds-since-midnight window
    pub fn window(&self) -> Result<SessionWindow> {
        let start = parse_time_of_day(&self.start)
            .map_err(|e| ConfigError::ValidationError(format!("session.start: {}", e)))?;
        let end = parse_time_of_day(&self.end)
            .map_err(|e| ConfigError::ValidationError(format!("session.end: {}", e)))?;

        let window = SessionWindow::new(seconds_since_midnight(start), seconds_since_midnight(end));
        if window.start >= window.end {
            return Err(ConfigError::ValidationError(
                "session.start must be before session.end".to_string(),
            ));
        }
        Ok(window)
    }
}

impl PlotConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        // Load YAML config
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: PlotConfig = serde_yaml::from_str(&yaml_content)?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.trades_file.is_empty() {
            return Err(ConfigError::ValidationError(
                "trades_file must be set".to_string(),
            ));
        }

        if self.quotes_file.is_empty() {
            return Err(ConfigError::ValidationError(
                "quotes_file must be set".to_string(),
            ));
        }

        // Session strings must parse and be ordered
        self.session.window()?;

        Ok(())
    }
}
