use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Data provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider API base URL (e.g., "https://api.provider.example/v5")
    pub base_url: String,
    /// Provider API key
    pub api_key: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// Result export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory where result files are written
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub provider: SanitizedProviderConfig,
    pub server: ServerConfig,
    pub export: ExportConfig,
}

/// Sanitized provider config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProviderConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: SanitizedProviderConfig {
                base_url: config.provider.base_url.clone(),
                api_key_configured: !config.provider.api_key.is_empty(),
                timeout_secs: config.provider.timeout_secs,
            },
            server: config.server.clone(),
            export: config.export.clone(),
        }
    }
}
