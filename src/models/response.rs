use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Success body returned to the webhook caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReport {
    pub sent: usize,

    /// Raw provider response, absent when no dispatch took place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
}

impl SendReport {
    pub fn empty() -> Self {
        Self {
            sent: 0,
            result: None,
        }
    }
}
