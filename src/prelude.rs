pub use crate::api::networks::Network;
pub use crate::api::rpc_client::{HttpTransport, HttpTransportConfig};
pub use crate::api::transport::Transport;
pub use crate::api::types::{
    GetEventsByEventTypeRequest, GetEventsByEventTypeResponse, GetEventsByModuleRequest,
    GetEventsByModuleResponse, GetEventsByObjectRequest, GetEventsByObjectResponse,
    GetEventsByOwnerRequest, GetEventsByOwnerResponse, GetEventsBySenderRequest,
    GetEventsBySenderResponse, GetEventsByTransactionRequest, GetEventsByTransactionResponse,
    SuiEventEnvelope,
};
pub use crate::client::SuiEventClient;
