//! Error types for the CEC HAL harness
//!
//! Error messages name the failing endpoint or file so a run log is enough
//! to diagnose a broken setup without re-running anything.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Scenario Errors ===
    #[error("Invalid scenario '{path}': {error}")]
    ScenarioParse { path: String, error: String },

    #[error("No scenario files found under '{0}'")]
    NoScenarios(String),

    #[error("Unknown command '{0}'. Use 'cec-harness apis' to list known commands")]
    UnknownCommand(String),

    // === Transport Errors ===
    #[error("Request '{method}' to device endpoint failed: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Stimulus '{event}' to mock-control endpoint failed: {source}")]
    Stimulus {
        event: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Endpoint '{url}' answered HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === Listener Lifecycle Errors ===
    #[error("Mock listener initialization failed: {0}")]
    ListenerInit(String),

    // === Report Errors ===
    #[error("Report file error: {0}")]
    Report(#[from] csv::Error),

    // === Run Outcome ===
    #[error("{failed} test case(s) failed")]
    ScenariosFailed { failed: usize },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error for a device command
    pub fn transport(method: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            method: method.to_string(),
            source,
        }
    }

    /// Create a transport error for a stimulus event
    pub fn stimulus(event: &str, source: reqwest::Error) -> Self {
        Self::Stimulus {
            event: event.to_string(),
            source,
        }
    }

    /// Create a scenario parse error
    pub fn scenario_parse(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        Self::ScenarioParse {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
