//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::{config_path, default_report_path};
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Endpoint locations
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Timeout and delay settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Endpoint locations for the device under test and the mock listener
#[derive(Debug, Deserialize, Clone)]
pub struct Endpoints {
    /// JSON-RPC endpoint exposed by the device under test
    #[serde(default = "default_device_url")]
    pub device_url: String,

    /// Base URL of the local mock-control listener
    #[serde(default = "default_control_url")]
    pub control_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            device_url: default_device_url(),
            control_url: default_control_url(),
        }
    }
}

fn default_device_url() -> String {
    "http://127.0.0.1:9998/jsonrpc".to_string()
}

fn default_control_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Timeout and delay settings
#[derive(Debug, Deserialize, Clone)]
pub struct Timeouts {
    /// Per-request timeout for HTTP calls, in seconds
    #[serde(default = "default_request")]
    pub request_secs: u64,

    /// Default settle delay between dependent actions, in seconds
    #[serde(default = "default_settle")]
    pub settle_secs: u64,

    /// Poll interval for wait_until steps, in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Overall bound for wait_until steps, in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: default_request(),
            settle_secs: default_settle(),
            poll_interval_ms: default_poll_interval(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

fn default_request() -> u64 {
    10
}
// The mocked device needs a moment to process prior stimuli; 3 seconds is
// the delay the HAL mock test plans were written against.
fn default_settle() -> u64 {
    3
}
fn default_poll_interval() -> u64 {
    500
}
fn default_poll_timeout() -> u64 {
    30
}

/// Report settings
#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Path of the append-only report CSV
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    super::Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    }
                })?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoints.device_url, "http://127.0.0.1:9998/jsonrpc");
        assert_eq!(config.endpoints.control_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeouts.settle_secs, 3);
        assert_eq!(config.timeouts.poll_timeout_secs, 30);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [endpoints]
            device_url = "http://10.0.0.5:9998/jsonrpc"

            [timeouts]
            settle_secs = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.device_url, "http://10.0.0.5:9998/jsonrpc");
        assert_eq!(config.endpoints.control_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeouts.settle_secs, 1);
        assert_eq!(config.timeouts.request_secs, 10);
    }
}
