//! # CLI Configuration
//!
//! Loaded once from environment variables at startup.
//!
//! ## Environment Variables
//! - `ASTRA_API_URL` - Inventory API base URL (default: `http://localhost:3333`)
//! - `ASTRA_DATA_DIR` - Override for the cart storage directory

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

/// Default inventory API endpoint for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform data directory and no override.
    #[error("could not determine a data directory; set ASTRA_DATA_DIR")]
    NoDataDir,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the inventory API.
    pub api_url: String,

    /// Directory the persisted cart lives in.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// ## Platform-Specific Data Paths
    /// - **macOS**: `~/Library/Application Support/com.astra.shop`
    /// - **Windows**: `%APPDATA%\astra\shop\data`
    /// - **Linux**: `~/.local/share/astrashop`
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url =
            env::var("ASTRA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let data_dir = match env::var("ASTRA_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => ProjectDirs::from("com", "astra", "shop")
                .ok_or(ConfigError::NoDataDir)?
                .data_dir()
                .to_path_buf(),
        };

        Ok(CliConfig { api_url, data_dir })
    }
}
