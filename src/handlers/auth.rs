use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::router::AppState;
use crate::service::Credential;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login -> the bare token as a plain-text body.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<String, ApiError> {
    state
        .login_flow()
        .login(Credential {
            email: request.email,
            password: request.password,
        })
        .await
}
