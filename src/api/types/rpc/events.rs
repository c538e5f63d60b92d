use super::super::SuiEventEnvelope;
use serde::Deserialize;
use serde_json::{json, Value};
use serde_with::{serde_as, DefaultOnNull};
use typed_builder::TypedBuilder;

/// Parameters for `sui_getEventsByEventType`. See [`crate::SuiEventClient::get_events_by_event_type`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsByEventTypeRequest {
    /// Fully qualified event type, e.g. `0x2::devnet_nft::MintNFTEvent`.
    #[builder(setter(into))]
    pub event_type: String,

    #[builder(default, setter(strip_option))]
    pub count: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub start_time: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<u64>,
}

impl GetEventsByEventTypeRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![
            json!(self.event_type),
            json!(self.count),
            json!(self.start_time),
            json!(self.end_time),
        ]
    }
}

/// Parameters for `sui_getEventsByModule`. See [`crate::SuiEventClient::get_events_by_module`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsByModuleRequest {
    /// Package id the module was published in.
    #[builder(setter(into))]
    pub package: String,
    #[builder(setter(into))]
    pub module: String,

    #[builder(default, setter(strip_option))]
    pub count: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub start_time: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<u64>,
}

impl GetEventsByModuleRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![
            json!(self.package),
            json!(self.module),
            json!(self.count),
            json!(self.start_time),
            json!(self.end_time),
        ]
    }
}

/// Parameters for `sui_getEventsByObject`. See [`crate::SuiEventClient::get_events_by_object`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsByObjectRequest {
    #[builder(setter(into))]
    pub object: String,

    #[builder(default, setter(strip_option))]
    pub count: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub start_time: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<u64>,
}

impl GetEventsByObjectRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![
            json!(self.object),
            json!(self.count),
            json!(self.start_time),
            json!(self.end_time),
        ]
    }
}

/// Parameters for `sui_getEventsByOwner`. See [`crate::SuiEventClient::get_events_by_owner`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsByOwnerRequest {
    /// Owner address, `0x`-prefixed.
    #[builder(setter(into))]
    pub owner: String,

    #[builder(default, setter(strip_option))]
    pub count: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub start_time: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<u64>,
}

impl GetEventsByOwnerRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![
            json!(self.owner),
            json!(self.count),
            json!(self.start_time),
            json!(self.end_time),
        ]
    }
}

/// Parameters for `sui_getEventsBySender`. See [`crate::SuiEventClient::get_events_by_sender`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsBySenderRequest {
    /// Sender address, `0x`-prefixed.
    #[builder(setter(into))]
    pub sender: String,

    #[builder(default, setter(strip_option))]
    pub count: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub start_time: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<u64>,
}

impl GetEventsBySenderRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![
            json!(self.sender),
            json!(self.count),
            json!(self.start_time),
            json!(self.end_time),
        ]
    }
}

/// Parameters for `sui_getEventsByTransaction`. See [`crate::SuiEventClient::get_events_by_transaction`].
#[derive(Clone, Default, Debug, TypedBuilder)]
pub struct GetEventsByTransactionRequest {
    /// Base58 transaction digest.
    #[builder(setter(into))]
    pub digest: String,
}

impl GetEventsByTransactionRequest {
    pub fn params(&self) -> Vec<Value> {
        vec![json!(self.digest)]
    }
}

/// Declares a response type wrapping the `result` member of a JSON-RPC response.
///
/// A `null` or missing `result` decodes to an empty list.
macro_rules! events_response {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[serde_as]
        #[derive(Deserialize, Clone, Default, Debug, PartialEq)]
        pub struct $name {
            #[serde_as(as = "DefaultOnNull")]
            #[serde(default)]
            pub result: Vec<SuiEventEnvelope>,
        }
    };
}

events_response!(
    /// Events returned by `sui_getEventsByEventType`.
    GetEventsByEventTypeResponse
);
events_response!(
    /// Events returned by `sui_getEventsByModule`.
    GetEventsByModuleResponse
);
events_response!(
    /// Events returned by `sui_getEventsByObject`.
    GetEventsByObjectResponse
);
events_response!(
    /// Events returned by `sui_getEventsByOwner`.
    GetEventsByOwnerResponse
);
events_response!(
    /// Events returned by `sui_getEventsBySender`.
    GetEventsBySenderResponse
);
events_response!(
    /// Events returned by `sui_getEventsByTransaction`.
    GetEventsByTransactionResponse
);
