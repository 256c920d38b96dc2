//! HTTP client for the device-under-test JSON-RPC endpoint

use serde_json::Value;
use tracing::{error, info};

use crate::common::{Error, Result};

use super::types::RpcRequest;

/// Client issuing commands against the device under test
///
/// One attempt per call, no retries. The response body is returned verbatim
/// so that the final comparison stays byte-for-byte.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    url: String,
}

impl DeviceClient {
    /// Create a client for the given JSON-RPC endpoint URL
    pub fn new(url: &str, request_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(request_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    /// The endpoint URL this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a command and return the raw response body
    pub async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<String> {
        let request = RpcRequest::new(method, params);

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::transport(method, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| Error::transport(method, e))
    }

    /// Issue a command, logging the outcome instead of propagating it
    ///
    /// Transport failures yield an empty body so the calling script can
    /// proceed to its comparison; the mismatch then fails the test case
    /// rather than aborting the run.
    pub async fn dispatch_logged(&self, method: &str, params: Option<Value>) -> String {
        match self.dispatch(method, params).await {
            Ok(body) => {
                info!("command sent for {}", method);
                body
            }
            Err(e) => {
                error!("command send for {} failed: {}", method, e);
                String::new()
            }
        }
    }
}
