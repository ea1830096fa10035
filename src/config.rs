use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the suggestion service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Google Drive folder the service pulls model assets from
    #[serde(default = "default_drive_url")]
    pub drive_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            drive_url: default_drive_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    // Local development address; deployments override via SMARTCOOK__BASE_URL
    "http://127.0.0.1:5000".to_string()
}

fn default_drive_url() -> String {
    "https://drive.google.com/drive/folders/1poHpksILFm9uIvBfJLogGzqbyUSQTFrt".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SMARTCOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SMARTCOOK__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("SMARTCOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
