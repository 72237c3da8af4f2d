//! Application Configuration
//!
//! Optional JSON settings; every field has a default.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::item::Quantity;

const DEFAULT_TITLE: &str = "🌴Far away💼";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header shown above the form
    pub title: String,
    /// Largest quantity offered by the form, clamped to 1..=20
    pub max_quantity: u8,
    /// trace, debug, info, warn, error or off
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_quantity: Quantity::MAX.get(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: AppConfig = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))?;
        config
            .log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| DomainError::InvalidInput(format!("config: log level {:?}", config.log_level)))?;
        Ok(config)
    }

    pub fn max_quantity(&self) -> Quantity {
        let clamped = self.max_quantity.clamp(Quantity::MIN.get(), Quantity::MAX.get());
        Quantity::new(clamped).unwrap_or(Quantity::MAX)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
