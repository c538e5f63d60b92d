use crate::api::networks::Network;
use crate::api::rpc_client::HttpTransport;
use crate::api::transport::Transport;
use crate::api::types::*;
use crate::error::{Error, Result};
use derive_new::new;
use serde::de::{DeserializeOwned, Error as DeError};
use serde_json::Value;
use tracing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiRequest {
    GetEventsByEventType,
    GetEventsByModule,
    GetEventsByObject,
    GetEventsByOwner,
    GetEventsBySender,
    GetEventsByTransaction,
}

impl SuiRequest {
    pub fn as_method_name(&self) -> &'static str {
        match &self {
            Self::GetEventsByEventType => "sui_getEventsByEventType",
            Self::GetEventsByModule => "sui_getEventsByModule",
            Self::GetEventsByObject => "sui_getEventsByObject",
            Self::GetEventsByOwner => "sui_getEventsByOwner",
            Self::GetEventsBySender => "sui_getEventsBySender",
            Self::GetEventsByTransaction => "sui_getEventsByTransaction",
        }
    }
}

/// Read-only client for the Sui event query methods.
///
/// Holds nothing but the transport, so a single instance can be shared (e.g. behind an `Arc`)
/// by any number of concurrent callers. To cancel or time out a call, drop its future or wrap
/// it in `tokio::time::timeout`.
#[derive(new)]
pub struct SuiEventClient<T> {
    transport: T,
}

impl SuiEventClient<HttpTransport> {
    /// Client talking JSON-RPC over HTTP to one of the public full nodes.
    pub fn for_network(network: Network) -> Self {
        Self::new(HttpTransport::for_network(network))
    }
}

impl<T: Transport> SuiEventClient<T> {
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a JSON-RPC request and decodes the response envelope into `R`.
    ///
    /// # Arguments
    ///
    /// * `method` - JSON-RPC method
    /// * `params` - JSON-RPC positional params
    ///
    /// # Returns
    ///
    /// The response, decoded from the envelope's `result` member.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] with the transport's error, untouched.
    /// * [`Error::InvalidJson`] if the body isn't JSON at all.
    /// * [`Error::JsonRpc`] if the node replied with an `error` member.
    /// * [`Error::Decode`] if the body isn't a JSON object or `result` doesn't have the expected shape.
    #[instrument(skip(self, params), fields(params = params.len()))]
    async fn post<R>(&self, method: SuiRequest, params: Vec<Value>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!("calling {}", method.as_method_name());

        let bytes = self
            .transport
            .request(method.as_method_name(), params)
            .await?;

        let response: Value = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidJson {
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })?;

        // anything but an object would be decoded field-by-position
        let envelope = match response {
            Value::Object(envelope) => envelope,
            other => {
                return Err(Error::Decode {
                    source: DeError::custom("expected a JSON-RPC response object"),
                    text: other.to_string(),
                })
            }
        };

        if envelope.get("error").is_some_and(|error| !error.is_null()) {
            let text = Value::Object(envelope.clone()).to_string();
            warn!(response = %text, "node returned a JSON-RPC error");
            let error = serde_json::from_value(Value::Object(envelope))
                .map_err(|source| Error::Decode { source, text })?;
            return Err(Error::JsonRpc(error));
        }

        let text = envelope
            .get("result")
            .map(Value::to_string)
            .unwrap_or_default();

        serde_json::from_value(Value::Object(envelope))
            .map_err(|source| Error::Decode { source, text })
    }

    /// Events of the given Move event type.
    pub async fn get_events_by_event_type(
        &self,
        request: GetEventsByEventTypeRequest,
    ) -> Result<GetEventsByEventTypeResponse> {
        self.post(SuiRequest::GetEventsByEventType, request.params())
            .await
    }

    /// Events emitted by functions of `request.module` in `request.package`.
    pub async fn get_events_by_module(
        &self,
        request: GetEventsByModuleRequest,
    ) -> Result<GetEventsByModuleResponse> {
        self.post(SuiRequest::GetEventsByModule, request.params())
            .await
    }

    /// Events touching the given object.
    pub async fn get_events_by_object(
        &self,
        request: GetEventsByObjectRequest,
    ) -> Result<GetEventsByObjectResponse> {
        self.post(SuiRequest::GetEventsByObject, request.params())
            .await
    }

    /// Events involving objects owned by the given address.
    pub async fn get_events_by_owner(
        &self,
        request: GetEventsByOwnerRequest,
    ) -> Result<GetEventsByOwnerResponse> {
        self.post(SuiRequest::GetEventsByOwner, request.params())
            .await
    }

    /// Events from transactions signed by the given address.
    pub async fn get_events_by_sender(
        &self,
        request: GetEventsBySenderRequest,
    ) -> Result<GetEventsBySenderResponse> {
        self.post(SuiRequest::GetEventsBySender, request.params())
            .await
    }

    /// All events emitted by one transaction.
    pub async fn get_events_by_transaction(
        &self,
        request: GetEventsByTransactionRequest,
    ) -> Result<GetEventsByTransactionResponse> {
        self.post(SuiRequest::GetEventsByTransaction, request.params())
            .await
    }
}
