use axum::{middleware::from_fn_with_state, routing::post, Router};

use crate::handlers::company_handlers::{change_status, view_applications};
use crate::middleware::auth_middleware::auth_middleware;
use crate::state::AppState;

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/view-applications", post(view_applications))
        .route("/change-status", post(change_status))
        .layer(from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
