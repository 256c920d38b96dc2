//! Stimulus emulation toward the mock-control listener
//!
//! The mock listener stands in for real hardware: protocol-level events
//! (a device appearing, an audio device reporting its power mode) are
//! injected by GET requests whose path embeds a JSON-encoded event payload.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use tracing::{error, info};

use crate::common::{Error, Result};

/// Characters escaped when embedding JSON in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\');

/// Client injecting emulated protocol events into the mock listener
#[derive(Debug, Clone)]
pub struct StimulusSender {
    http: reqwest::Client,
    base_url: String,
}

impl StimulusSender {
    /// Create a sender for the given mock-control base URL
    pub fn new(base_url: &str, request_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(request_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the stimulus URL for an event and payload
    fn event_url(&self, event: &str, payload: &Value) -> Result<String> {
        let json = serde_json::to_string(payload)?;
        let encoded = utf8_percent_encode(&json, PATH_SEGMENT);
        Ok(format!("{}/{}/{}", self.base_url, event, encoded))
    }

    /// Inject an emulated event carrying a JSON payload
    ///
    /// Succeeds iff the listener answers with a 2xx status. The outcome is
    /// logged either way; callers proceed regardless, as the test scripts do.
    pub async fn send(&self, event: &str, payload: &Value) -> Result<()> {
        let url = self.event_url(event, payload)?;

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::stimulus(event, e))?;

        let status = response.status();
        if status.is_success() {
            info!("sendMessage emulation success for {}", event);
            Ok(())
        } else {
            Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            })
        }
    }

    /// Issue a payload-less control call (listener lifecycle)
    async fn control(&self, action: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, action);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::stimulus(action, e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            })
        }
    }
}

/// Scoped handle on the mock listener
///
/// The listener is initialized exactly once when a run starts and reset
/// when it ends, instead of being re-initialized ad hoc from inside test
/// scripts. Acquisition failure aborts the run before any test executes.
pub struct MockListener {
    sender: StimulusSender,
}

impl MockListener {
    /// Initialize the mock listener for a run
    pub async fn acquire(sender: StimulusSender) -> Result<Self> {
        sender
            .control("Hdmicec.initialize")
            .await
            .map_err(|e| Error::ListenerInit(e.to_string()))?;
        info!("mock listener initialized");
        Ok(Self { sender })
    }

    /// Reset the mock listener at the end of a run
    ///
    /// A failed reset is logged, not propagated: outcomes are already
    /// recorded by the time the listener is released.
    pub async fn release(self) {
        if let Err(e) = self.sender.control("Hdmicec.reset").await {
            error!("mock listener reset failed: {}", e);
        } else {
            info!("mock listener reset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_url_encodes_payload() {
        let sender = StimulusSender::new("http://127.0.0.1:5000/", 5).unwrap();
        let url = sender
            .event_url("Hdmicec.sendMessage", &json!({"command": "reportAudioMode"}))
            .unwrap();

        assert!(url.starts_with("http://127.0.0.1:5000/Hdmicec.sendMessage/"));
        // JSON delimiters must not survive unescaped in the path segment
        assert!(!url[url.rfind("sendMessage/").unwrap()..].contains('{'));
        assert!(!url[url.rfind("sendMessage/").unwrap()..].contains('"'));
        assert!(url.contains("%7B%22command%22"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let a = StimulusSender::new("http://localhost:5000", 5).unwrap();
        let b = StimulusSender::new("http://localhost:5000/", 5).unwrap();
        let payload = json!({"x": 1});
        assert_eq!(
            a.event_url("Hdmicec.sendMessage", &payload).unwrap(),
            b.event_url("Hdmicec.sendMessage", &payload).unwrap()
        );
    }
}
