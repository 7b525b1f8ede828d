use reqwest::{Client, header::ACCEPT};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{debug, info};

use crate::{config::Config, models::push::PushMessage};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("push provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("push provider returned status {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Client for the Expo push API. Fire-and-forget: one POST per batch, no
/// retries, no receipt polling.
pub struct ExpoClient {
    http_client: Client,
    push_url: String,
    access_token: Option<String>,
}

impl ExpoClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            push_url: config.expo_push_url.clone(),
            access_token: config.expo_access_token.clone(),
        }
    }

    /// Submit the whole batch in one request and return the provider's
    /// response body. An empty batch returns immediately without contacting
    /// the provider.
    pub async fn dispatch(
        &self,
        messages: &[PushMessage],
    ) -> Result<Option<JsonValue>, DispatchError> {
        if messages.is_empty() {
            debug!("Empty message batch, skipping provider call");
            return Ok(None);
        }

        let mut request = self
            .http_client
            .post(&self.push_url)
            .header(ACCEPT, "application/json")
            .json(messages);

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DispatchError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        info!(batch_size = messages.len(), "Push batch submitted");

        // The body is kept verbatim when it is not valid JSON, so the caller
        // never loses the provider diagnostic.
        let result = serde_json::from_str(&body).unwrap_or(JsonValue::String(body));

        Ok(Some(result))
    }
}
