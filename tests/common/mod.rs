use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::response::Response;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use usergate::db::UserStorage;
use usergate::security::{PasswordHasher, TokenService};
use usergate::{AppState, api_router};

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_BOOTSTRAP_PASSWORD: &str = "admin12345";

pub struct TestApp {
    pub app: Router,
    pub storage: UserStorage,
    pub tokens: Arc<TokenService>,
    pub db_path: PathBuf,
}

impl TestApp {
    /// Seed a user directly through the storage layer, bypassing the
    /// authenticated CRUD routes. Low bcrypt cost keeps tests fast.
    pub async fn seed_user(&self, name: &str, email: &str, password: &str) -> i64 {
        let hash = PasswordHasher::with_cost(4)
            .hash(password)
            .expect("hash failed");
        self.storage
            .insert(name, email, &hash)
            .await
            .expect("seed insert failed")
    }

    pub async fn cleanup(self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Build a router backed by a throwaway SQLite file unique to this test run.
pub async fn spawn_app(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!("usergate-{}-{}-{}.sqlite", tag, std::process::id(), nanos));

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = UserStorage::connect(&database_url)
        .await
        .expect("storage connect failed");

    let tokens =
        Arc::new(TokenService::from_secret(TEST_SIGNING_SECRET).expect("key derivation failed"));

    let state = AppState::new(
        storage.clone(),
        tokens.clone(),
        Arc::from(TEST_BOOTSTRAP_PASSWORD),
    );
    let app = api_router(state);

    TestApp {
        app,
        storage,
        tokens,
        db_path,
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
