//! Port-tagged channel messages
//!
//! Every message is a JSON object whose `port` field names the channel:
//!
//! ```text
//! bridge -> UI   {"port":"init","flags":{"tags":[...]}}
//! bridge -> UI   {"port":"clipboard","value":"..."}
//! UI -> bridge   {"port":"updateTags","value":[...]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::tags::InitFlags;

/// Message sent from the bridge to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "port", rename_all = "camelCase")]
pub enum OutboundMessage {
    Init { flags: InitFlags },
    Clipboard { value: String },
}

/// Message sent from the UI to the bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "port", rename_all = "camelCase")]
pub enum InboundMessage {
    UpdateTags { value: Value },
}

impl OutboundMessage {
    pub fn port(&self) -> &'static str {
        match self {
            OutboundMessage::Init { .. } => "init",
            OutboundMessage::Clipboard { .. } => "clipboard",
        }
    }
}
