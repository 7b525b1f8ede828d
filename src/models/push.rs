use serde::{Deserialize, Serialize};

use crate::models::{category::Category, notification::NotificationRecord};

/// One Expo push message, shaped for the `/push/send` wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub data: PushData,

    #[serde(rename = "channelId")]
    pub channel_id: String,

    pub sound: String,
    pub priority: Priority,
}

/// Payload the client reads to deep-link after the user taps the notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushData {
    pub route: String,

    #[serde(rename = "notificationId")]
    pub notification_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Default,
    High,
}

impl PushMessage {
    pub fn build(
        record: &NotificationRecord,
        category: Category,
        route: &str,
        device_token: &str,
    ) -> Self {
        Self {
            to: device_token.to_string(),
            title: record.title.clone(),
            body: record.body.clone().unwrap_or_default(),
            data: PushData {
                route: route.to_string(),
                notification_id: record.id.clone(),
            },
            channel_id: category.channel_id().to_string(),
            sound: "default".to_string(),
            priority: category.priority(),
        }
    }
}
