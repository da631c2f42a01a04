use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use review_client::api::TOKEN_HEADER;
use serde_json::json;

use crate::handlers::jwt::verify_token;
use crate::models::company::Company;
use crate::state::AppState;

/// Resolves the `token` header to a [`Company`] request extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // 1. token header
    let token = match req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
    {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return unauthorized("Token not found"),
    };

    // 2. verify JWT
    let data = match verify_token(&token, &state.jwt_secret) {
        Ok(d) => d,
        Err(e) => {
            let msg = match *e.kind() {
                ErrorKind::ExpiredSignature => "Token expired",
                _ => "Invalid token",
            };
            tracing::debug!(error = %e, "Rejected company token");
            return unauthorized(msg);
        }
    };

    // 3. company scope for the handlers
    req.extensions_mut().insert(Company {
        id: data.claims.sub,
    });

    next.run(req).await
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
