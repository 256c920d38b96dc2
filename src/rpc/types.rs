//! JSON-RPC 2.0 envelope types
//!
//! JSON-RPC is a payload convention here, not a protocol implementation:
//! responses are compared as raw text, so these types are only used to
//! build requests and to answer them from the mock HAL.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed request id used by every test case in the suite
///
/// The expected-response strings are recorded with `"id":42` baked in, so
/// the id must never vary between requests.
pub const RPC_ID: u64 = 42;

/// A JSON-RPC 2.0 request
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Build a request with the suite's fixed id
    pub fn new(method: &str, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: RPC_ID,
            method: method.to_string(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// Build a success response echoing the request id
    pub fn result(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_fixed_id() {
        let req = RpcRequest::new("org.rdk.HdmiCecSource.getOSDName", None);
        let text = serde_json::to_string(&req).unwrap();
        assert!(text.contains("\"id\":42"));
        assert!(!text.contains("params"));
    }

    #[test]
    fn test_response_envelope_shape() {
        let resp = RpcResponse::result(42, json!({"name": "TV Box", "success": true}));
        let text = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","id":42,"result":{"name":"TV Box","success":true}}"#
        );
    }
}
