//! JSON-RPC command dispatch toward the device under test

pub mod catalog;
mod client;
mod types;

pub use client::DeviceClient;
pub use types::{RpcRequest, RpcResponse, RPC_ID};
