use std::error::Error;

use server::config::ServerConfig;
use server::handlers::jwt::generate_token;
use server::state::AppState;
use server::{app, cors_layer, seed};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.jwt_secret.clone());

    if let Some(path) = &config.seed_file {
        let count = seed::load_seed_file(&state, path)?;
        tracing::info!(path = %path.display(), count, "Seeded applications");
    }

    // Tokens are pre-issued; print one per seeded company for local use.
    for company_id in state.company_ids() {
        let token = generate_token(&company_id, &config.jwt_secret, config.token_ttl)?;
        tracing::info!(company = %company_id, token = %token, "Development token");
    }

    let app = app(state).layer(cors_layer(config.client_url.as_deref())?);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Company API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
