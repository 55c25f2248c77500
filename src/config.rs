use crate::error::{Result, WineListError};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
}

/// Where the wine list JSON document lives. Exactly one of `path` or `url`
/// should be set; `path` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<String>,
    pub url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            WineListError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;

        if config.dataset.path.is_none() && config.dataset.url.is_none() {
            return Err(WineListError::Config(
                "config.toml must set dataset.path or dataset.url".to_string(),
            ));
        }

        Ok(config)
    }
}
