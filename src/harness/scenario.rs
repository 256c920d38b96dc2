//! Test case scenario types
//!
//! Defines the data structures for deserializing YAML test case files.
//! A scenario is a linear script: setup steps, then a single verify
//! command whose response is compared verbatim against a recorded string.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::common::{Error, Result};

/// A complete test case loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct Scenario {
    /// Test case identifier (also the report row id)
    pub name: String,
    /// Optional description of what the case verifies
    pub description: Option<String>,
    /// Setup steps executed before the verify command
    #[serde(default)]
    pub steps: Vec<Step>,
    /// The command under test and its expected response
    pub verify: Verify,
}

/// A single setup step in the execution flow
#[derive(Deserialize, Debug)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Inject an emulated protocol event via the mock listener
    Stimulus {
        /// Event name, e.g. "Hdmicec.sendMessage"
        event: String,
        /// JSON payload embedded in the stimulus URL
        payload: Value,
    },
    /// Dispatch a setup command to the device under test
    Command {
        /// Command alias or fully-qualified JSON-RPC method
        method: String,
        /// Optional JSON-RPC params
        params: Option<Value>,
    },
    /// Fixed delay giving the mocked device time to settle
    Settle {
        /// Seconds to wait (default: configured settle_secs)
        secs: Option<u64>,
    },
    /// Poll a command until its response contains a substring
    WaitUntil {
        /// Command alias or fully-qualified JSON-RPC method
        method: String,
        /// Optional JSON-RPC params
        params: Option<Value>,
        /// Substring the response must contain for the condition to hold
        contains: String,
        /// Overall bound in seconds (default: configured poll_timeout_secs)
        timeout_secs: Option<u64>,
        /// Poll interval in milliseconds (default: configured poll_interval_ms)
        interval_ms: Option<u64>,
    },
}

/// The command under test and the comparison closing the case
#[derive(Deserialize, Debug)]
pub struct Verify {
    /// Command alias or fully-qualified JSON-RPC method
    pub method: String,
    /// Optional JSON-RPC params
    pub params: Option<Value>,
    /// Expected response, compared byte-for-byte against the raw body
    pub expect: String,
    /// Message recorded on Pass (default: generic match text)
    pub pass_message: Option<String>,
    /// Message recorded on Fail (default: generic mismatch text)
    pub fail_message: Option<String>,
}

impl Scenario {
    /// Load and parse a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| Error::scenario_parse(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SCENARIO: &str = r#"
name: TCID013_HdmiCecSink_sendAudioDevicePowerOnMessage
description: Power on the connected audio device after standby
steps:
  - action: command
    method: send_standby_message
  - action: settle
    secs: 3
  - action: command
    method: perform_otp_action
  - action: stimulus
    event: Hdmicec.sendMessage
    payload:
      command: reportAudioMode
      status: on
  - action: wait_until
    method: get_active_source_status
    contains: '"status":true'
    timeout_secs: 10
verify:
  method: send_audio_device_power_on_message
  expect: '{"jsonrpc":"2.0","id":42,"result":{"success":true}}'
"#;

    #[test]
    fn test_parse_full_scenario() {
        let scenario: Scenario = serde_yaml::from_str(FULL_SCENARIO).unwrap();
        assert_eq!(
            scenario.name,
            "TCID013_HdmiCecSink_sendAudioDevicePowerOnMessage"
        );
        assert_eq!(scenario.steps.len(), 5);
        assert!(matches!(scenario.steps[0], Step::Command { .. }));
        assert!(matches!(scenario.steps[1], Step::Settle { secs: Some(3) }));
        assert!(matches!(scenario.steps[3], Step::Stimulus { .. }));
        assert!(matches!(
            scenario.steps[4],
            Step::WaitUntil {
                timeout_secs: Some(10),
                ..
            }
        ));
        assert_eq!(
            scenario.verify.expect,
            r#"{"jsonrpc":"2.0","id":42,"result":{"success":true}}"#
        );
    }

    #[test]
    fn test_parse_minimal_scenario() {
        let scenario: Scenario = serde_yaml::from_str(
            r#"
name: TCID004_getOSDName_default
verify:
  method: get_osd_name
  expect: '{"jsonrpc":"2.0","id":42,"result":{"name":"TV Box","success":true}}'
"#,
        )
        .unwrap();

        assert!(scenario.steps.is_empty());
        assert!(scenario.description.is_none());
        assert_eq!(scenario.verify.method, "get_osd_name");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: std::result::Result<Scenario, _> = serde_yaml::from_str(
            r#"
name: bad
steps:
  - action: reboot
verify:
  method: get_osd_name
  expect: 'x'
"#,
        );
        assert!(result.is_err());
    }
}
