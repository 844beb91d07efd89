//! Router assembly and shared application state.
//!
//! The login and bootstrap routes are public; everything under `/api/users`
//! sits behind the bearer-token middleware. CORS preflight is answered by
//! the outermost layer without reaching the auth gate.

use axum::http::Method;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::db::UserStorage;
use crate::handlers;
use crate::middleware::auth::require_bearer_auth;
use crate::security::{PasswordHasher, TokenService};
use crate::service::{BootstrapCoordinator, LoginFlow, UserService};

/// Values constructed once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub storage: UserStorage,
    pub tokens: Arc<TokenService>,
    pub hasher: PasswordHasher,
    bootstrap_password: Arc<str>,
}

impl AppState {
    pub fn new(
        storage: UserStorage,
        tokens: Arc<TokenService>,
        bootstrap_password: Arc<str>,
    ) -> Self {
        Self {
            storage,
            tokens,
            hasher: PasswordHasher::default(),
            bootstrap_password,
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.storage.clone(), self.hasher)
    }

    pub fn login_flow(&self) -> LoginFlow {
        LoginFlow::new(self.storage.clone(), self.hasher, self.tokens.clone())
    }

    pub fn bootstrap_coordinator(&self) -> BootstrapCoordinator {
        BootstrapCoordinator::new(
            self.storage.clone(),
            self.hasher,
            self.tokens.clone(),
            self.bootstrap_password.clone(),
        )
    }
}

pub fn api_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/bootstrap", get(handlers::bootstrap::bootstrap));

    let protected = Router::new()
        .route(
            "/api/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/api/users/{id}",
            get(handlers::users::get_by_id)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    public.merge(protected).layer(cors).with_state(state)
}
