use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tracing::info;

use crate::db::UserRecord;
use crate::error::ApiError;
use crate::middleware::AuthSubject;
use crate::router::AppState;
use crate::service::NewUser;

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User fields safe to return to clients; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service().list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service().get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    AuthSubject(actor): AuthSubject,
    Json(request): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.user_service().create(request.into()).await?;
    info!(actor = %actor, user_id = created.id, "user created");
    let location = format!("/api/users/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(created)),
    ))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let updated = state.user_service().update(id, request.into()).await?;
    Ok(Json(UserResponse::from(updated)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthSubject(actor): AuthSubject,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.user_service().delete(id).await?;
    info!(actor = %actor, user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
