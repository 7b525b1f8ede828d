use crate::models::notification::NotificationRecord;

/// Compute the in-app deep-link route for a notification.
///
/// Evaluated as an ordered sequence of precedence rules; the first matching
/// rule wins. Reference-scoped rules come before type-only defaults: a
/// reference, when present, pinpoints the exact object the user should land
/// on, while the per-type fallbacks exist for legacy rows without references.
/// Total over every possible record; never fails.
pub fn resolve_route(record: &NotificationRecord) -> String {
    let notification_type = record.notification_type.as_str();
    let reference_type = record.reference_type.as_deref().unwrap_or("");
    let reference_id = record.reference_id();

    // Service run notifications
    if reference_type == "service_run" && reference_id.is_some() {
        return match notification_type {
            "service_run_completed" | "service_run_cancelled" => "/d2/trades?tab=completed",
            _ => "/d2/trades?tab=active",
        }
        .to_string();
    }

    match notification_type {
        "service_run_created" => return "/d2/trades?tab=active".to_string(),
        "service_run_completed" | "service_run_cancelled" => {
            return "/d2/trades?tab=completed".to_string();
        }
        _ => {}
    }

    // Trade request / offer notifications
    if matches!(reference_type, "trade_request" | "offer") {
        if let Some(id) = reference_id {
            return match notification_type {
                "new_message" => format!("/d2/chat?trade={id}"),
                "trade_request_received" | "offer_received" => {
                    "/d2/trades?tab=received".to_string()
                }
                "trade_request_accepted" | "offer_accepted" => "/d2/trades?tab=active".to_string(),
                "trade_request_rejected" | "offer_rejected" => "/d2/trades?tab=sent".to_string(),
                _ => "/d2/trades".to_string(),
            };
        }
    }

    // Chat notifications
    if reference_type == "chat" {
        if let Some(id) = reference_id {
            return format!("/d2/chat?trade={id}");
        }
    }

    // Rating notifications
    if matches!(reference_type, "transaction" | "rating") {
        return "/d2/trades".to_string();
    }

    // Wishlist match, linking to the listing
    if reference_type == "listing" {
        if let Some(id) = reference_id {
            return format!("/d2/item/{id}");
        }
    }

    if notification_type == "wishlist_match" {
        if let Some(listing_id) = record.metadata_str("listingId") {
            return format!("/d2/item/{listing_id}");
        }
    }

    // Default fallback by type
    match notification_type {
        "trade_request_received" | "offer_received" => "/d2/trades?tab=received",
        "trade_request_accepted" | "offer_accepted" => "/d2/trades?tab=active",
        "trade_request_rejected" | "offer_rejected" => "/d2/trades?tab=sent",
        "trade_completed" => "/d2/trades?tab=completed",
        "new_message" => "/d2/chat",
        "wishlist_match" => "/d2/wishlist",
        _ => "/d2",
    }
    .to_string()
}
