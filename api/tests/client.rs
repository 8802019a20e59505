//! Integration tests for [`ApiClient`] against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiConfig, ApiError, RedirectDraft};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(format!("{}/api", server.uri())))
}

fn mapping_json(id: i64, shortcode: &str, target_url: &str) -> serde_json::Value {
    json!({ "id": id, "shortcode": shortcode, "target_url": target_url })
}

#[tokio::test]
async fn test_login_sends_form_credentials_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=a%40b.com"))
        .and(body_string_contains("password=x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T1",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let token = client_for(&server).login("a@b.com", "x").await.unwrap();
    assert_eq!(token, "T1");
}

#[tokio::test]
async fn test_login_rejection_is_unauthorized_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Incorrect email or password" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).login("a@b.com", "bad").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.detail(), Some("Incorrect email or password"));
}

#[tokio::test]
async fn test_login_without_token_in_body_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).login("a@b.com", "x").await.unwrap_err();
    assert_eq!(err, ApiError::MissingToken);
}

#[tokio::test]
async fn test_login_with_empty_token_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "" })))
        .mount(&server)
        .await;

    let err = client_for(&server).login("a@b.com", "x").await.unwrap_err();
    assert_eq!(err, ApiError::MissingToken);
}

#[tokio::test]
async fn test_register_posts_json_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(body_json(json!({ "email": "a@b.com", "password": "x" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "unused",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    // The body is ignored; a 2xx is all that matters.
    client_for(&server).register("a@b.com", "x").await.unwrap();
}

#[tokio::test]
async fn test_register_conflict_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Email already registered" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).register("a@b.com", "x").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Email already registered"));
}

#[tokio::test]
async fn test_list_sends_bearer_token_and_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/redirects/"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirects": [
                mapping_json(3, "docs", "https://example.com/docs"),
                mapping_json(5, "blog", "https://example.com/blog"),
                mapping_json(7, "cv", "https://example.com/cv"),
            ]
        })))
        .mount(&server)
        .await;

    let list = client_for(&server).list_redirects("T1").await.unwrap();
    let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 5, 7]);
    assert_eq!(list[0].shortcode, "docs");
    assert_eq!(list[0].target_url, "https://example.com/docs");
}

#[tokio::test]
async fn test_list_without_redirects_key_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/redirects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let list = client_for(&server).list_redirects("T1").await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_list_with_rejected_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/redirects/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid token" })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_redirects("stale").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_create_posts_draft_and_returns_stored_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/redirects/"))
        .and(header("authorization", "Bearer T1"))
        .and(body_json(json!({ "shortcode": "docs", "target_url": "https://example.com/docs" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mapping_json(9, "docs", "https://example.com/docs")),
        )
        .mount(&server)
        .await;

    let draft = RedirectDraft {
        shortcode: "docs".to_string(),
        target_url: "https://example.com/docs".to_string(),
    };
    let created = client_for(&server).create_redirect("T1", &draft).await.unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.shortcode, "docs");
}

#[tokio::test]
async fn test_update_puts_to_the_mapping_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/redirects/5"))
        .and(header("authorization", "Bearer T1"))
        .and(body_json(json!({ "shortcode": "blog", "target_url": "https://example.com/new" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mapping_json(5, "blog", "https://example.com/new")),
        )
        .mount(&server)
        .await;

    let draft = RedirectDraft {
        shortcode: "blog".to_string(),
        target_url: "https://example.com/new".to_string(),
    };
    let updated = client_for(&server).update_redirect("T1", 5, &draft).await.unwrap();
    assert_eq!(updated.target_url, "https://example.com/new");
}

#[tokio::test]
async fn test_delete_targets_the_mapping_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/redirects/5"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "msg": "Deleted" })))
        .mount(&server)
        .await;

    client_for(&server).delete_redirect("T1", 5).await.unwrap();
}

#[tokio::test]
async fn test_error_body_without_detail_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/redirects/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let draft = RedirectDraft {
        shortcode: "docs".to_string(),
        target_url: "https://example.com/docs".to_string(),
    };
    let err = client_for(&server).create_redirect("T1", &draft).await.unwrap_err();
    assert_eq!(err.message_or("Error al crear redirección"), "Error al crear redirección");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:0/api"));
    let err = client.login("a@b.com", "x").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
