mod common;
mod http_helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::read_json;
use http_helpers::{bearer_request, json_request};
use msgboard::app::{AppState, build_router};
use msgboard::auth::credentials::Authenticator;
use msgboard::auth::token::TokenService;
use msgboard::store::memory::InMemoryStore;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let state = AppState {
        api_version: "v1".to_string(),
        store: Arc::new(InMemoryStore::new()),
        authenticator: Arc::new(Authenticator::with_demo_users()),
        tokens: TokenService::new("test-secret", Duration::from_secs(900)),
    };
    build_router(state).into_service()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("get")
}

async fn fetch_token(app: &axum::routing::RouterIntoService<axum::body::Body, ()>) -> String {
    let response = app
        .clone()
        .oneshot(get("/token?username=test_user&password=foobar"))
        .await
        .expect("token");
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await["access_token"]
        .as_str()
        .expect("access_token")
        .to_string()
}

#[tokio::test]
async fn token_is_issued_for_valid_credentials() {
    let app = app();
    let token = fetch_token(&app).await;
    // Shape check only; the signature is covered by unit tests.
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn bad_credentials_are_denied() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/token?username=test_user&password=wrong"))
        .await
        .expect("token");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let error = read_json(response).await;
    assert_eq!(error["code"], "forbidden");
    assert_eq!(error["message"], "Access denied");

    let response = app
        .clone()
        .oneshot(get("/token?username=nobody&password=anything"))
        .await
        .expect("token");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn token_parameters_are_strictly_validated() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/token?username=test_user"))
        .await
        .expect("token");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = read_json(response).await;
    assert_eq!(error["code"], "validation_error");

    let response = app
        .clone()
        .oneshot(get(
            "/token?username=test_user&password=foobar&remember=true",
        ))
        .await
        .expect("token");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_requires_a_valid_bearer_token() {
    let app = app();

    let create = json_request(
        "POST",
        "/messages",
        serde_json::json!({ "name": "Bob", "message": "Hi Bob!" }),
    );
    let response = app.clone().oneshot(create).await.expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);

    let bare_delete = Request::builder()
        .method("DELETE")
        .uri("/messages/1")
        .body(Body::empty())
        .expect("delete");
    let response = app.clone().oneshot(bare_delete).await.expect("delete");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["code"], "unauthorized");

    let response = app
        .clone()
        .oneshot(bearer_request("DELETE", "/messages/1", "not-a-token"))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The record survived both rejected attempts.
    let response = app.clone().oneshot(get("/messages/1")).await.expect("get");
    assert_eq!(response.status(), StatusCode::OK);

    let token = fetch_token(&app).await;
    let response = app
        .clone()
        .oneshot(bearer_request("DELETE", "/messages/1", &token))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/messages/1")).await.expect("get");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn authorized_delete_of_missing_message_is_not_found() {
    let app = app();
    let token = fetch_token(&app).await;
    let response = app
        .clone()
        .oneshot(bearer_request("DELETE", "/messages/42", &token))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await["message"],
        "Message 42 doesn't exist."
    );
}

#[tokio::test]
async fn token_rejects_tokens_signed_with_another_secret() {
    let app = app();

    let create = json_request(
        "POST",
        "/messages",
        serde_json::json!({ "name": "Bob", "message": "Hi Bob!" }),
    );
    let response = app.clone().oneshot(create).await.expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);

    let foreign = TokenService::new("other-secret", Duration::from_secs(900))
        .issue("test_user")
        .expect("foreign token");
    let response = app
        .clone()
        .oneshot(bearer_request("DELETE", "/messages/1", &foreign))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
