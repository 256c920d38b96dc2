//! Mock CEC HAL listener
//!
//! An HTTP stand-in for the real hardware abstraction layer, serving both
//! the JSON-RPC device endpoint and the emulation control routes on one
//! port. The CLI and the integration tests share this implementation.

mod state;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::rpc::{RpcRequest, RpcResponse};

pub use state::{MockHal, DEFAULT_OSD_NAME};

type SharedHal = Arc<Mutex<MockHal>>;

/// Build the mock HAL router with fresh device state
pub fn router() -> Router {
    router_with_state(Arc::new(Mutex::new(MockHal::default())))
}

/// Build the router around existing state (used by tests to inspect it)
pub fn router_with_state(state: SharedHal) -> Router {
    Router::new()
        .route("/jsonrpc", post(handle_rpc))
        .route("/Hdmicec.initialize", get(handle_initialize))
        .route("/Hdmicec.reset", get(handle_reset))
        .route("/{event}/{payload}", get(handle_stimulus))
        .with_state(state)
}

/// Serve the mock HAL on an already-bound listener
pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

async fn handle_rpc(
    State(state): State<SharedHal>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    let mut hal = state.lock().expect("mock state poisoned");

    match hal.handle(&request.method, request.params.as_ref()) {
        Some(result) => Json(RpcResponse::result(request.id, result)),
        None => {
            warn!("unimplemented method {}", request.method);
            Json(RpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id,
                result: None,
                error: Some(json!({
                    "code": -32601,
                    "message": format!("Unknown method: {}", request.method)
                })),
            })
        }
    }
}

async fn handle_stimulus(
    State(state): State<SharedHal>,
    Path((event, payload)): Path<(String, String)>,
) -> Response {
    let payload: Value = match serde_json::from_str(&payload) {
        Ok(v) => v,
        Err(e) => {
            warn!("stimulus {} carried invalid JSON: {}", event, e);
            return (StatusCode::BAD_REQUEST, "invalid payload").into_response();
        }
    };

    let mut hal = state.lock().expect("mock state poisoned");
    if hal.apply_event(&event, &payload) {
        info!("applied stimulus {}", event);
        (StatusCode::OK, "OK").into_response()
    } else {
        warn!("unknown stimulus event {}", event);
        (StatusCode::NOT_FOUND, "unknown event").into_response()
    }
}

async fn handle_initialize(State(state): State<SharedHal>) -> &'static str {
    let mut hal = state.lock().expect("mock state poisoned");
    hal.reset();
    hal.initialized = true;
    info!("mock HAL initialized");
    "OK"
}

async fn handle_reset(State(state): State<SharedHal>) -> &'static str {
    let mut hal = state.lock().expect("mock state poisoned");
    hal.reset();
    info!("mock HAL reset");
    "OK"
}
