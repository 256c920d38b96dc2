//! Catalog of known device methods
//!
//! Scenarios may name a command either by its short alias (as the test
//! plans do) or by the fully-qualified JSON-RPC method. Unknown qualified
//! names pass through untouched so new plugin methods don't require a
//! catalog change.

/// A known device command
#[derive(Debug, Clone, Copy)]
pub struct Api {
    /// Short alias used in scenario files
    pub alias: &'static str,
    /// Fully-qualified JSON-RPC method
    pub method: &'static str,
    /// What the command does
    pub description: &'static str,
}

/// Known HdmiCecSource and HdmiCecSink commands
pub const APIS: &[Api] = &[
    Api {
        alias: "get_osd_name",
        method: "org.rdk.HdmiCecSource.getOSDName",
        description: "Read the OSD name the device advertises over CEC",
    },
    Api {
        alias: "set_osd_name",
        method: "org.rdk.HdmiCecSource.setOSDName",
        description: "Set the OSD name the device advertises over CEC",
    },
    Api {
        alias: "get_vendor_id",
        method: "org.rdk.HdmiCecSource.getVendorId",
        description: "Read the CEC vendor id",
    },
    Api {
        alias: "get_enabled",
        method: "org.rdk.HdmiCecSource.getEnabled",
        description: "Read whether the CEC source plugin is enabled",
    },
    Api {
        alias: "set_enabled",
        method: "org.rdk.HdmiCecSource.setEnabled",
        description: "Enable or disable the CEC source plugin",
    },
    Api {
        alias: "get_active_source_status",
        method: "org.rdk.HdmiCecSource.getActiveSourceStatus",
        description: "Read whether this device is the active source",
    },
    Api {
        alias: "send_standby_message",
        method: "org.rdk.HdmiCecSource.sendStandbyMessage",
        description: "Broadcast a CEC standby message",
    },
    Api {
        alias: "perform_otp_action",
        method: "org.rdk.HdmiCecSource.performOTPAction",
        description: "Perform a one-touch-play action (image view on + active source)",
    },
    Api {
        alias: "send_audio_device_power_on_message",
        method: "org.rdk.HdmiCecSink.sendAudioDevicePowerOnMessage",
        description: "Power on the connected audio device",
    },
    Api {
        alias: "request_audio_device_power_status",
        method: "org.rdk.HdmiCecSink.requestAudioDevicePowerStatus",
        description: "Query the power status of the connected audio device",
    },
];

/// Resolve a scenario command name to a fully-qualified method
///
/// Returns `None` for a short name that is not in the catalog; qualified
/// names (anything containing a '.') resolve to themselves.
pub fn resolve(name: &str) -> Option<&str> {
    if name.contains('.') {
        return Some(name);
    }
    APIS.iter()
        .find(|api| api.alias == name)
        .map(|api| api.method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias() {
        assert_eq!(
            resolve("get_osd_name"),
            Some("org.rdk.HdmiCecSource.getOSDName")
        );
        assert_eq!(
            resolve("send_audio_device_power_on_message"),
            Some("org.rdk.HdmiCecSink.sendAudioDevicePowerOnMessage")
        );
    }

    #[test]
    fn test_resolve_qualified_passthrough() {
        assert_eq!(
            resolve("org.rdk.HdmiCecSource.getOSDName"),
            Some("org.rdk.HdmiCecSource.getOSDName")
        );
        // Unknown but qualified names pass through
        assert_eq!(
            resolve("org.rdk.HdmiCecSink.setMenuLanguage"),
            Some("org.rdk.HdmiCecSink.setMenuLanguage")
        );
    }

    #[test]
    fn test_resolve_unknown_alias() {
        assert_eq!(resolve("frobnicate"), None);
    }
}
