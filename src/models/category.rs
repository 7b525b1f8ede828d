use serde::{Deserialize, Serialize};

use crate::models::push::Priority;

/// Notification category; mirrors the category mapping used by the client apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trade,
    Chat,
    Wishlist,
}

impl Category {
    /// Map a notification type to its category. Unrecognized types fall back
    /// to `Trade` so that a new type introduced upstream never blocks delivery.
    pub fn classify(notification_type: &str) -> Self {
        match notification_type {
            "trade_request_received"
            | "trade_request_accepted"
            | "trade_request_rejected"
            | "rating_received"
            | "offer_received"
            | "offer_accepted"
            | "offer_rejected"
            | "trade_completed"
            | "service_run_created"
            | "service_run_completed"
            | "service_run_cancelled" => Category::Trade,
            "new_message" => Category::Chat,
            "wishlist_match" => Category::Wishlist,
            _ => Category::Trade,
        }
    }

    /// Android notification channel for this category.
    pub fn channel_id(&self) -> &'static str {
        match self {
            Category::Trade => "trade-notifications",
            Category::Chat => "chat-notifications",
            Category::Wishlist => "wishlist-notifications",
        }
    }

    /// Chat is latency-sensitive (active conversations), so it ships at
    /// elevated delivery priority.
    pub fn priority(&self) -> Priority {
        match self {
            Category::Chat => Priority::High,
            _ => Priority::Default,
        }
    }
}
