use eyre::eyre;
use sui_events_rs::prelude::*;
use tracing::*;

mod common;
use common::{init_tracing, Config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let config = Config::from_env().await?;
    let digest = config
        .tx_digest
        .clone()
        .ok_or_else(|| eyre!("set SUI_TX_DIGEST to the transaction to inspect"))?;

    let response = config
        .client
        .get_events_by_transaction(GetEventsByTransactionRequest::builder().digest(digest).build())
        .await?;

    info!(count = response.result.len(), "events");
    for event in &response.result {
        debug!("{event:#?}");
    }

    Ok(())
}
