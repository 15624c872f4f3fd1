use serde::{Deserialize, Serialize};

pub const LOG_LEVEL_ENV: &str = "BOOK_CATALOG_LOG_LEVEL";

// Configuration abstracts config options for the catalog process
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub log_level: String,
}

impl Configuration {
    pub fn new(log_level: &str) -> Self {
        Configuration {
            log_level: log_level.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
        Configuration::new(level.as_str())
    }

    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
