use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::{expo::ExpoClient, store::TokenStore},
    config::Config,
    error::ApiError,
    models::{
        category::Category,
        health::HealthCheckResponse,
        notification::WebhookPayload,
        push::PushMessage,
        response::SendReport,
    },
    routing::resolve_route,
};

pub struct AppState {
    pub token_store: TokenStore,
    pub expo: ExpoClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            token_store: TokenStore::new(config),
            expo: ExpoClient::new(config),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/send-push-notification", post(send_push_notification))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let state = Arc::new(AppState::new(&config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Push dispatch server started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Webhook entry point: one inserted notification row in, one push batch out.
///
/// Single linear pass per invocation: validate, look up tokens, classify,
/// resolve the deep-link route, build one message per device, dispatch.
/// No retries; duplicate webhook deliveries re-send.
async fn send_push_notification(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<Json<SendReport>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidPayload(e.body_text()))?;
    let record = payload.record.ok_or(ApiError::MissingRecord)?;

    let tokens = state.token_store.device_tokens(&record.user_id).await?;

    if tokens.is_empty() {
        info!(
            user_id = %record.user_id,
            notification_type = %record.notification_type,
            "No registered devices, nothing to send"
        );
        return Ok(Json(SendReport::empty()));
    }

    let category = Category::classify(&record.notification_type);
    let route = resolve_route(&record);

    let messages: Vec<PushMessage> = tokens
        .iter()
        .map(|token| PushMessage::build(&record, category, &route, token))
        .collect();

    let result = state.expo.dispatch(&messages).await?;

    info!(
        sent = messages.len(),
        notification_type = %record.notification_type,
        user_id = %record.user_id,
        "Push notifications dispatched"
    );

    Ok(Json(SendReport {
        sent: messages.len(),
        result,
    }))
}

async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy())
}
