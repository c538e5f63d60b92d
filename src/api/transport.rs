use crate::error::TransportError;
use serde_json::Value;
use std::future::Future;

/// Delivers a single JSON-RPC call and hands back the raw response body.
///
/// Implementors own the envelope (`jsonrpc`, `id`, `method`, `params`) and the delivery;
/// interpreting the body is left to [`crate::SuiEventClient`].
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).request(method, params)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).request(method, params)
    }
}
