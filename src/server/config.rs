use super::constant;
use crate::request::user_agent::UserAgent;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
    pub ytdlp_path: PathBuf,
    pub video_dir: PathBuf,
    pub notes_path: PathBuf,
    pub default_output: PathBuf,
    pub format: String,
    pub merge_output_format: String,
    pub quiet: bool,
    pub user_agent: UserAgent,
}

pub type SharedConfig = Arc<RwLock<Config>>;

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            address: constant::SERVER_ADDRESS,
            port: constant::SERVER_PORT,
            ytdlp_path: PathBuf::from(constant::YTDLP_PROGRAM),
            video_dir: PathBuf::from(constant::VIDEO_DIR),
            notes_path: PathBuf::from(constant::NOTES_PATH),
            default_output: PathBuf::from(constant::DEFAULT_OUTPUT),
            format: constant::FORMAT_SELECTOR.to_string(),
            merge_output_format: constant::MERGE_OUTPUT_FORMAT.to_string(),
            quiet: false,
            user_agent: UserAgent::Chrome,
        }
    }

    /// Reads `path`, falling back to defaults (and writing them) when it can't.
    pub async fn load(path: &Path) -> Self {
        match Self::load_from_file(path).await {
            Ok(config) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed, using defaults");
                let config = Self::new();
                if let Err(e) = config.save(path).await {
                    warn!(path = %path.display(), error = %e, "save failed");
                };
                config
            }
        }
    }

    pub async fn update(
        new_config: Config,
        shared_config: &SharedConfig,
        path: &Path,
    ) -> Result<()> {
        // Held across the save so concurrent updates reach the file in order.
        let mut config = shared_config.write().await;
        new_config.save(path).await?;
        *config = new_config;

        Ok(())
    }

    async fn load_from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(&self)?;
        fs::write(path, data)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

pub fn create_shared_config(config: Config) -> SharedConfig {
    Arc::new(RwLock::new(config))
}
