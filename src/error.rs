pub use crate::api::types::JsonRpcResponseError;
use thiserror::Error;

/// The crate `Error` type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Response body is not valid JSON: {text}")]
    InvalidJson { text: String },

    #[error("JsonRpcError: {0:?}")]
    JsonRpc(JsonRpcResponseError),

    #[error("Failed to decode `result` from JSON: {text}")]
    Decode {
        source: serde_json::Error,
        text: String,
    },
}

/// Errors raised by a [`crate::Transport`] before any response body is available.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Custom(String),
}

/// The crate `Result` type.
pub type Result<T> = core::result::Result<T, Error>;
