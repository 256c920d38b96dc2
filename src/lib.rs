//! CEC HAL harness - test automation for a mocked HDMI-CEC HAL
//!
//! This library drives a device under test over HTTP/JSON-RPC, injects
//! emulated protocol stimuli through a mock-control listener, and records
//! one Pass/Fail outcome per test case to an append-only CSV report.

pub mod cli;
pub mod commands;
pub mod common;
pub mod emulation;
pub mod harness;
pub mod mock;
pub mod report;
pub mod rpc;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use harness::{run_scenario, RunContext};
pub use report::{ReportContext, Status, TestRecord};
