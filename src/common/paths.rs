//! Configuration and report file paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/cec-hal-harness/`, `~/.local/share/cec-hal-harness/`
//! - macOS: `~/Library/Application Support/cec-hal-harness/`
//! - Windows: `%APPDATA%\cec-hal-harness\`

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "cec-hal-harness";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the default location for the report CSV
///
/// Falls back to the working directory when no data dir is available.
pub fn default_report_path() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("report.csv"))
        .unwrap_or_else(|| PathBuf::from("cec-report.csv"))
}

/// Ensure the parent directory of a report path exists
pub fn ensure_parent_dir(path: &std::path::Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_path_is_valid() {
        let path = default_report_path();
        assert!(!path.as_os_str().is_empty());
    }

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }
}
