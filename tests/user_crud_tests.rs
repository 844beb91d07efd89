mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{TestApp, body_string, spawn_app};

fn authed_json(token: &str, method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn authed(token: &str, method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("failed to build request")
}

async fn spawn_authed(tag: &str) -> (TestApp, String) {
    let t = spawn_app(tag).await;
    t.seed_user("Ada", "ada@a.com", "secret").await;
    let token = t.tokens.issue("ada@a.com").expect("issue failed");
    (t, token)
}

#[tokio::test]
async fn create_returns_201_with_location_and_no_hash() {
    let (t, token) = spawn_authed("crud-create").await;

    let resp = t
        .app
        .clone()
        .oneshot(authed_json(
            &token,
            "POST",
            "/api/users",
            json!({"name": "Grace", "email": "grace@a.com", "password": "hopper1"}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Location header missing")
        .to_string();
    assert!(location.starts_with("/api/users/"));

    let body: Value = serde_json::from_str(&body_string(resp).await).expect("invalid json");
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["email"], "grace@a.com");
    assert!(body.get("password_hash").is_none());

    t.cleanup().await;
}

#[tokio::test]
async fn create_with_blank_field_returns_400() {
    let (t, token) = spawn_authed("crud-blank").await;

    for payload in [
        json!({"name": "  ", "email": "x@a.com", "password": "pw"}),
        json!({"name": "X", "email": "", "password": "pw"}),
        json!({"name": "X", "email": "x@a.com", "password": " "}),
    ] {
        let resp = t
            .app
            .clone()
            .oneshot(authed_json(&token, "POST", "/api/users", payload))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    t.cleanup().await;
}

#[tokio::test]
async fn duplicate_email_returns_400() {
    let (t, token) = spawn_authed("crud-dup").await;

    let resp = t
        .app
        .clone()
        .oneshot(authed_json(
            &token,
            "POST",
            "/api/users",
            json!({"name": "Ada Again", "email": "ada@a.com", "password": "pw"}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("already registered"));

    t.cleanup().await;
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let (t, token) = spawn_authed("crud-404").await;

    let resp = t
        .app
        .clone()
        .oneshot(authed(&token, "GET", "/api/users/9999"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    t.cleanup().await;
}

#[tokio::test]
async fn update_replaces_fields_and_rehashes_password() {
    let (t, token) = spawn_authed("crud-update").await;
    let id = t.seed_user("Old Name", "old@a.com", "oldpw").await;
    let before = t
        .storage
        .find_by_id(id)
        .await
        .expect("lookup failed")
        .expect("seed row missing");

    let resp = t
        .app
        .clone()
        .oneshot(authed_json(
            &token,
            "PUT",
            &format!("/api/users/{id}"),
            json!({"name": "New Name", "email": "new@a.com", "password": "newpw"}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(resp).await).expect("invalid json");
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["email"], "new@a.com");

    let after = t
        .storage
        .find_by_id(id)
        .await
        .expect("lookup failed")
        .expect("row missing after update");
    assert_ne!(after.password_hash, before.password_hash);

    t.cleanup().await;
}

#[tokio::test]
async fn delete_removes_the_user() {
    let (t, token) = spawn_authed("crud-delete").await;
    let id = t.seed_user("Gone Soon", "gone@a.com", "pw").await;

    let resp = t
        .app
        .clone()
        .oneshot(authed(&token, "DELETE", &format!("/api/users/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = t
        .app
        .clone()
        .oneshot(authed(&token, "GET", &format!("/api/users/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = t
        .app
        .clone()
        .oneshot(authed(&token, "DELETE", &format!("/api/users/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    t.cleanup().await;
}
