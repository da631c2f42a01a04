pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use review_client::api::TOKEN_HEADER;
use tower_http::cors::{Any, CorsLayer};

use routes::company::company_routes;
use state::AppState;

/// CORS for the dashboard front-end; any origin when none is configured.
pub fn cors_layer(client_url: Option<&str>) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let cors = match client_url {
        Some(url) => CorsLayer::new()
            .allow_origin(url.parse::<HeaderValue>()?)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(TOKEN_HEADER)]),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };
    Ok(cors)
}

pub fn app(state: AppState) -> Router {
    Router::new().nest("/company", company_routes(state))
}
