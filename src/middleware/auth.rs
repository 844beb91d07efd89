use axum::extract::{FromRequestParts, Request, State};
use axum::http::{Method, header::AUTHORIZATION, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::router::AppState;

/// Per-request gate over the protected route tree.
///
/// Requires `Authorization: Bearer <token>`; a missing or malformed header
/// rejects with 401 "Missing token", a token that fails validation rejects
/// with 401 "Invalid token". On success the subject email is attached as a
/// request extension for downstream handlers. Login, bootstrap, and CORS
/// preflight never reach this function: the public routes are not layered
/// with it and preflight is answered by the CORS layer outside the router.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Non-preflight OPTIONS carries no identity either; let the router answer.
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let Some(auth) = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return ApiError::TokenMissing.into_response();
    };

    let auth = auth.trim();
    let Some(token) = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
    else {
        return ApiError::TokenMissing.into_response();
    };

    match state.tokens.validate(token) {
        Ok(subject) => {
            req.extensions_mut().insert(AuthSubject(subject));
            next.run(req).await
        }
        Err(_) => ApiError::TokenInvalid.into_response(),
    }
}

/// The authenticated identity (subject email) established by
/// `require_bearer_auth`, extractable from any protected handler.
#[derive(Debug, Clone)]
pub struct AuthSubject(pub String);

impl<S> FromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSubject>()
            .cloned()
            .ok_or_else(|| ApiError::TokenMissing.into_response())
    }
}
