//! Mutable state of the mocked CEC device
//!
//! Holds just enough device state for the HAL-mock test plans: OSD name,
//! enablement, active-source tracking, and the audio device power status
//! driven by emulated protocol events.

use serde_json::{json, Value};

/// Default OSD name advertised by the mocked device
pub const DEFAULT_OSD_NAME: &str = "TV Box";

/// In-memory device state behind the mock endpoints
#[derive(Debug)]
pub struct MockHal {
    pub osd_name: String,
    pub enabled: bool,
    pub active_source: bool,
    pub standby: bool,
    /// Set when a reportAudioMode stimulus arrives
    pub audio_mode_reported: bool,
    pub audio_powered: bool,
    pub initialized: bool,
}

impl Default for MockHal {
    fn default() -> Self {
        Self {
            osd_name: DEFAULT_OSD_NAME.to_string(),
            enabled: true,
            active_source: false,
            standby: false,
            audio_mode_reported: false,
            audio_powered: false,
            initialized: false,
        }
    }
}

impl MockHal {
    /// Reset to power-on defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Answer a JSON-RPC method, mutating state where the command demands
    ///
    /// Returns `None` for methods the mock does not implement.
    pub fn handle(&mut self, method: &str, params: Option<&Value>) -> Option<Value> {
        match method {
            "org.rdk.HdmiCecSource.getOSDName" => {
                Some(json!({ "name": self.osd_name, "success": true }))
            }
            "org.rdk.HdmiCecSource.setOSDName" => {
                if let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) {
                    self.osd_name = name.to_string();
                    Some(json!({ "success": true }))
                } else {
                    Some(json!({ "success": false }))
                }
            }
            "org.rdk.HdmiCecSource.getVendorId" => {
                Some(json!({ "success": true, "vendorid": "0019fb" }))
            }
            "org.rdk.HdmiCecSource.getEnabled" => {
                Some(json!({ "enabled": self.enabled, "success": true }))
            }
            "org.rdk.HdmiCecSource.setEnabled" => {
                if let Some(enabled) = params.and_then(|p| p.get("enabled")).and_then(Value::as_bool)
                {
                    self.enabled = enabled;
                    Some(json!({ "success": true }))
                } else {
                    Some(json!({ "success": false }))
                }
            }
            "org.rdk.HdmiCecSource.getActiveSourceStatus" => {
                Some(json!({ "status": self.active_source, "success": true }))
            }
            "org.rdk.HdmiCecSource.sendStandbyMessage" => {
                self.standby = true;
                self.active_source = false;
                Some(json!({ "success": true }))
            }
            "org.rdk.HdmiCecSource.performOTPAction" => {
                self.standby = false;
                self.active_source = true;
                Some(json!({ "success": true }))
            }
            "org.rdk.HdmiCecSink.sendAudioDevicePowerOnMessage" => {
                self.audio_powered = true;
                Some(json!({ "success": true }))
            }
            "org.rdk.HdmiCecSink.requestAudioDevicePowerStatus" => {
                Some(json!({ "powerStatus": if self.audio_powered { 0 } else { 1 }, "success": true }))
            }
            _ => None,
        }
    }

    /// Apply an emulated protocol event
    ///
    /// Returns false for events the mock does not understand.
    pub fn apply_event(&mut self, event: &str, payload: &Value) -> bool {
        match event {
            "Hdmicec.sendMessage" => {
                if payload.get("command").and_then(Value::as_str) == Some("reportAudioMode") {
                    self.audio_mode_reported = true;
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_osd_name_response() {
        let mut hal = MockHal::default();
        let result = hal.handle("org.rdk.HdmiCecSource.getOSDName", None).unwrap();
        assert_eq!(result, json!({ "name": "TV Box", "success": true }));
    }

    #[test]
    fn test_otp_action_marks_active_source() {
        let mut hal = MockHal::default();
        let result = hal
            .handle("org.rdk.HdmiCecSource.getActiveSourceStatus", None)
            .unwrap();
        assert_eq!(result, json!({ "status": false, "success": true }));

        hal.handle("org.rdk.HdmiCecSource.performOTPAction", None)
            .unwrap();
        let result = hal
            .handle("org.rdk.HdmiCecSource.getActiveSourceStatus", None)
            .unwrap();
        assert_eq!(result, json!({ "status": true, "success": true }));
    }

    #[test]
    fn test_standby_clears_active_source() {
        let mut hal = MockHal::default();
        hal.handle("org.rdk.HdmiCecSource.performOTPAction", None)
            .unwrap();
        hal.handle("org.rdk.HdmiCecSource.sendStandbyMessage", None)
            .unwrap();
        assert!(hal.standby);
        assert!(!hal.active_source);
    }

    #[test]
    fn test_report_audio_mode_event() {
        let mut hal = MockHal::default();
        assert!(hal.apply_event(
            "Hdmicec.sendMessage",
            &json!({ "command": "reportAudioMode", "status": "on" })
        ));
        assert!(hal.audio_mode_reported);

        assert!(!hal.apply_event("Hdmicec.unknown", &json!({})));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let mut hal = MockHal::default();
        assert!(hal.handle("org.rdk.HdmiCecSource.rewire", None).is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut hal = MockHal::default();
        hal.handle(
            "org.rdk.HdmiCecSource.setOSDName",
            Some(&json!({ "name": "Bedroom Box" })),
        )
        .unwrap();
        hal.handle("org.rdk.HdmiCecSource.performOTPAction", None)
            .unwrap();

        hal.reset();
        assert_eq!(hal.osd_name, DEFAULT_OSD_NAME);
        assert!(!hal.active_source);
    }
}
