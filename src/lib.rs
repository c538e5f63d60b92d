//! Typed client for the Sui full node event query API (`sui_getEventsBy*`).
//!
//! ```no_run
//! use sui_events_rs::prelude::*;
//!
//! # async fn run() -> sui_events_rs::Result<()> {
//! let client = SuiEventClient::for_network(Network::Devnet);
//! let events = client
//!     .get_events_by_transaction(
//!         GetEventsByTransactionRequest::builder()
//!             .digest("Gq9Yh4FVcyDvMXDUN7f1vm6ySyT2F2RqyEJcFuCF5Pkf")
//!             .build(),
//!     )
//!     .await?;
//! println!("{} events", events.result.len());
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
pub mod prelude;

pub use api::networks::{Network, SuiNetwork};
pub use api::rpc_client::{HttpTransport, HttpTransportConfig};
pub use api::transport::Transport;
pub use api::types::{
    EventId, JsonRpcErrorObject, JsonRpcResponseDetailedError, JsonRpcResponseError,
    SuiEventEnvelope,
};
pub use client::SuiRequest;
pub use error::{Error, Result, TransportError};
pub use prelude::*;
