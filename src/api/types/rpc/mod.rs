use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [Value],
}

/// Top-level `error` member of a JSON-RPC response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonRpcResponseError {
    pub jsonrpc: Option<String>,
    pub id: Option<Value>,
    pub error: JsonRpcErrorObject,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum JsonRpcErrorObject {
    Simple(String),
    Detailed(JsonRpcResponseDetailedError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonRpcResponseDetailedError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

mod events;

pub use events::*;
