use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// A single event record as returned by the `sui_getEventsBy*` methods.
///
/// Only the envelope metadata is typed; the event body itself (`moveEvent`, `transferObject`,
/// `newObject`, ...) is kept as raw JSON in [`SuiEventEnvelope::payload`].
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuiEventEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Milliseconds since the UNIX epoch. Accepts both numbers and decimal strings.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_digest: Option<String>,

    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Event identifier. Older nodes send `{ txSeq, eventSeq }`, others a plain string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum EventId {
    #[serde(rename_all = "camelCase")]
    Sequenced { tx_seq: u64, event_seq: u64 },
    Raw(String),
}

impl SuiEventEnvelope {
    /// Returns the payload member with the lexicographically smallest key, together with that key.
    ///
    /// Payload keys are kept sorted, not in document order.
    #[must_use]
    pub fn event(&self) -> Option<(&str, &Value)> {
        self.payload.iter().next().map(|(kind, body)| (kind.as_str(), body))
    }
}
