//! Test case execution
//!
//! Reads YAML test case scenarios and drives the device under test and the
//! mock listener through them, recording one Pass/Fail outcome per case.

mod runner;
mod scenario;

pub use runner::{run_scenario, RunContext};
pub use scenario::{Scenario, Step, Verify};
