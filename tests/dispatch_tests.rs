use anyhow::Result;
use push_dispatch::{
    clients::expo::{DispatchError, ExpoClient},
    config::Config,
    models::{category::Category, notification::NotificationRecord, push::PushMessage},
    routing::resolve_route,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn test_config(push_url: &str, access_token: Option<&str>) -> Config {
    Config {
        supabase_url: "http://localhost".to_string(),
        supabase_service_role_key: "service-key".to_string(),
        expo_access_token: access_token.map(str::to_string),
        expo_push_url: push_url.to_string(),
        server_port: 0,
    }
}

fn build_messages(tokens: &[&str]) -> Vec<PushMessage> {
    let record = NotificationRecord {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: "u-1".to_string(),
        notification_type: "new_message".to_string(),
        title: "New message".to_string(),
        body: Some("Hello".to_string()),
        reference_type: Some("chat".to_string()),
        reference_id: Some("C1".to_string()),
        metadata: None,
    };

    let category = Category::classify(&record.notification_type);
    let route = resolve_route(&record);

    tokens
        .iter()
        .map(|token| PushMessage::build(&record, category, &route, token))
        .collect()
}

/// Test: an empty batch returns without contacting the provider
#[tokio::test]
async fn test_empty_batch_skips_provider() -> Result<()> {
    let server = MockServer::start().await;
    let client = ExpoClient::new(&test_config(&server.uri(), None));

    let result = client.dispatch(&[]).await?;

    assert!(result.is_none(), "Empty batch should yield no provider result");
    assert!(
        server.received_requests().await.unwrap_or_default().is_empty(),
        "Provider should not be contacted for an empty batch"
    );

    Ok(())
}

/// Test: the whole batch goes out as one JSON array request
#[tokio::test]
async fn test_batch_is_submitted_in_one_request() -> Result<()> {
    let server = MockServer::start().await;

    let provider_response = json!({ "data": [{ "status": "ok" }, { "status": "ok" }, { "status": "ok" }] });
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ExpoClient::new(&test_config(&server.uri(), None));
    let messages = build_messages(&["tok-a", "tok-b", "tok-c"]);

    let result = client.dispatch(&messages).await?;
    assert_eq!(result, Some(provider_response));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    let batch = body.as_array().expect("batch should be a JSON array");
    assert_eq!(batch.len(), 3);

    // Same route and notification id everywhere, only the destination differs
    for message in batch {
        assert_eq!(message["data"]["route"], "/d2/chat?trade=C1");
        assert_eq!(message["data"]["notificationId"], batch[0]["data"]["notificationId"]);
        assert_eq!(message["priority"], "high");
        assert_eq!(message["channelId"], "chat-notifications");
        assert_eq!(message["sound"], "default");
    }
    assert_eq!(batch[0]["to"], "tok-a");
    assert_eq!(batch[1]["to"], "tok-b");
    assert_eq!(batch[2]["to"], "tok-c");

    Ok(())
}

/// Test: a non-success provider status preserves the raw response body
#[tokio::test]
async fn test_provider_failure_preserves_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("provider exploded"))
        .mount(&server)
        .await;

    let client = ExpoClient::new(&test_config(&server.uri(), None));
    let messages = build_messages(&["tok-a"]);

    let error = client.dispatch(&messages).await.unwrap_err();

    match error {
        DispatchError::Provider { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "provider exploded");
        }
        other => panic!("expected provider error, got: {other}"),
    }

    Ok(())
}

/// Test: the bearer credential is attached when configured
#[tokio::test]
async fn test_access_token_sets_authorization_header() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer expo-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ExpoClient::new(&test_config(&server.uri(), Some("expo-secret")));
    let messages = build_messages(&["tok-a"]);

    client.dispatch(&messages).await?;

    Ok(())
}

/// Test: no authorization header goes out when no credential is configured
#[tokio::test]
async fn test_no_authorization_header_without_token() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = ExpoClient::new(&test_config(&server.uri(), None));
    let messages = build_messages(&["tok-a"]);

    client.dispatch(&messages).await?;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].headers.get("authorization").is_none(),
        "No credential configured, no authorization header expected"
    );

    Ok(())
}
