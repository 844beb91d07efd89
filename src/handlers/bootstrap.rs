use axum::extract::State;

use crate::error::ApiError;
use crate::router::AppState;

/// GET /api/bootstrap -> plain-text admin token on the first call,
/// 403 "Bootstrap already executed." on every later one.
pub async fn bootstrap(State(state): State<AppState>) -> Result<String, ApiError> {
    state.bootstrap_coordinator().run().await
}
