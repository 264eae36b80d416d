use super::schema::AppIdConfig;
use crate::platform::Platform;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("No application identifier configured for platform '{0}'")]
    MissingIdentifier(Platform),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./appids.yaml
    /// 2. ~/.appid/config.yaml
    /// 3. Builtin identifiers
    pub async fn load_default() -> Result<AppIdConfig, ConfigError> {
        let local_config = PathBuf::from("./appids.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".appid").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        debug!("No config file found, using builtin identifiers");
        Ok(AppIdConfig::default())
    }

    /// Load and validate a single file. An empty file yields the builtin config.
    pub async fn load_from(path: &Path) -> Result<AppIdConfig, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(AppIdConfig::default());
        }

        let config: AppIdConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
