use std::time::{SystemTime, UNIX_EPOCH};
use sui_events_rs::prelude::*;
use tracing::*;

mod common;
use common::{init_tracing, Config};

/// How far back to look for events.
const WINDOW_MS: u64 = 24 * 60 * 60 * 1000;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let config = Config::from_env().await?;
    let now = u64::try_from(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())?;

    let response = config
        .client
        .get_events_by_event_type(
            GetEventsByEventTypeRequest::builder()
                .event_type(config.event_type.clone())
                .count(20)
                .start_time(now.saturating_sub(WINDOW_MS))
                .end_time(now)
                .build(),
        )
        .await?;

    info!(count = response.result.len(), event_type = %config.event_type, "events");
    for event in &response.result {
        match event.event() {
            Some((kind, body)) => debug!(?event.id, kind, %body),
            None => debug!(?event.id, "event without payload"),
        }
    }

    Ok(())
}
