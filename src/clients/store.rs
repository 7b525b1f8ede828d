use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token store returned status {status}: {body}")]
    Query { status: u16, body: String },
}

/// Read-side client for the device token registrations, via PostgREST.
///
/// Queries run with the service role key (bypasses row-level security;
/// this service is a trusted backend process).
pub struct TokenStore {
    http_client: Client,
    base_url: String,
    service_role_key: String,
}

#[derive(Debug, Deserialize)]
struct DeviceTokenRow {
    #[serde(default)]
    expo_push_token: Option<String>,
}

impl TokenStore {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.supabase_url.clone(),
            service_role_key: config.supabase_service_role_key.clone(),
        }
    }

    /// All push tokens registered for a user. Rows with an empty or missing
    /// token are dropped; a user with no devices yields an empty list, not
    /// an error.
    pub async fn device_tokens(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let url = format!("{}/rest/v1/device_tokens", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("select", "expo_push_token"),
                ("user_id", &format!("eq.{user_id}")),
            ])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Accept-Profile", "d2")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Query {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<DeviceTokenRow> = response.json().await?;

        let tokens: Vec<String> = rows
            .into_iter()
            .filter_map(|row| row.expo_push_token)
            .filter(|token| !token.is_empty())
            .collect();

        debug!(user_id, token_count = tokens.len(), "Device tokens fetched");

        Ok(tokens)
    }
}
