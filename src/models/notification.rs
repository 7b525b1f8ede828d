use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Body posted by the database webhook on INSERT into the notifications table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub record: Option<NotificationRecord>,
}

/// One inserted notification row, as delivered by the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub user_id: String,

    #[serde(rename = "type")]
    pub notification_type: String,

    pub title: String,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub reference_type: Option<String>,

    #[serde(default)]
    pub reference_id: Option<String>,

    #[serde(default)]
    pub metadata: Option<HashMap<String, JsonValue>>,
}

impl NotificationRecord {
    /// Reference id, with empty strings treated as absent.
    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
    }
}
