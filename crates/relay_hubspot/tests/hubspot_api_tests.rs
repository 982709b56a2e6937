// Integration tests for the HubSpot client logic, run against a local mock
// of the upstream API.

use relay_config::HubspotConfig;
use relay_hubspot::logic::{create_contact, refresh_access_token};
use relay_hubspot::HubspotError;
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hubspot_config(base_url: &str) -> HubspotConfig {
    HubspotConfig {
        client_id: Some("test-client-id".to_string()),
        client_secret: Some("test-client-secret".to_string()),
        base_url: base_url.to_string(),
    }
}

fn contact_fields() -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("email".to_string(), json!("jane@example.com"));
    fields.insert("firstname".to_string(), json!("Jane"));
    fields
}

#[tokio::test]
async fn refresh_returns_upstream_token_pair_verbatim() {
    let server = MockServer::start().await;
    let token_pair = json!({
        "access_token": "new-access",
        "refresh_token": "new-refresh",
        "token_type": "bearer",
        "expires_in": 1800
    });

    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("client_id=test-client-id"))
        .and(body_string_contains("client_secret=test-client-secret"))
        .and(body_string_contains("refresh_token=old-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_pair.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let result = refresh_access_token(&config, "old-refresh").await.unwrap();
    assert_eq!(result, token_pair);
}

#[tokio::test]
async fn refresh_maps_upstream_error_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "refresh token is expired"
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let err = refresh_access_token(&config, "old-refresh")
        .await
        .unwrap_err();
    match err {
        HubspotError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert_eq!(message, "refresh token is expired");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn refresh_defaults_to_unknown_error_on_opaque_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let err = refresh_access_token(&config, "old-refresh")
        .await
        .unwrap_err();
    match err {
        HubspotError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 502);
            assert_eq!(message, "Unknown error");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn refresh_without_credentials_makes_no_network_call() {
    let server = MockServer::start().await;
    // Call-count assertion: a missing secret must fail before any request.
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = HubspotConfig {
        client_id: Some("test-client-id".to_string()),
        client_secret: None,
        base_url: server.uri(),
    };
    let err = refresh_access_token(&config, "old-refresh")
        .await
        .unwrap_err();
    assert!(matches!(err, HubspotError::ConfigError));

    let config = HubspotConfig {
        client_id: Some("".to_string()),
        client_secret: Some("test-client-secret".to_string()),
        base_url: server.uri(),
    };
    let err = refresh_access_token(&config, "old-refresh")
        .await
        .unwrap_err();
    assert!(matches!(err, HubspotError::ConfigError));
}

#[tokio::test]
async fn refresh_transport_failure_is_distinguishable_from_api_error() {
    // Nothing listens here; the connection is refused before any response.
    let config = hubspot_config("http://127.0.0.1:1");
    let err = refresh_access_token(&config, "old-refresh")
        .await
        .unwrap_err();
    assert!(matches!(err, HubspotError::RequestError(_)));
    assert!(err.to_string().starts_with("HubSpot API request failed"));
}

#[tokio::test]
async fn create_contact_transport_failure_is_distinguishable_from_api_error() {
    // Nothing listens here; the connection is refused before any response.
    let config = hubspot_config("http://127.0.0.1:1");
    let err = create_contact(&config, &contact_fields(), "access-token")
        .await
        .unwrap_err();
    assert!(matches!(err, HubspotError::RequestError(_)));
    assert!(err.to_string().starts_with("HubSpot API request failed"));
}

#[tokio::test]
async fn create_contact_wraps_fields_and_sends_bearer_token() {
    let server = MockServer::start().await;
    let created = json!({
        "id": "51",
        "properties": { "email": "jane@example.com", "firstname": "Jane" }
    });

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .and(header("authorization", "Bearer access-token"))
        .and(header("content-type", "application/json"))
        .and(body_string_contains("\"properties\""))
        .and(body_string_contains("jane@example.com"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let result = create_contact(&config, &contact_fields(), "access-token")
        .await
        .unwrap();
    assert_eq!(result, created);
}

#[tokio::test]
async fn create_contact_maps_upstream_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let err = create_contact(&config, &contact_fields(), "stale-token")
        .await
        .unwrap_err();
    match err {
        HubspotError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 401);
            assert_eq!(message, "invalid token");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn create_contact_with_empty_token_makes_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = hubspot_config(&server.uri());
    let err = create_contact(&config, &contact_fields(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, HubspotError::MissingAccessToken));
}
