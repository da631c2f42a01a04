use std::env;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin. Any origin when unset.
    pub client_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            client_url: None,
            jwt_secret: "secret".to_string(),
            token_ttl: Duration::hours(24),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let mut config = Self::default();

        if let Ok(addr) = env::var("BIND_ADDR") {
            config.bind_addr = addr.parse()?;
        }
        config.client_url = env::var("CLIENT_URL").ok().filter(|v| !v.is_empty());
        if let Ok(secret) = env::var("JWT_SECRET") {
            config.jwt_secret = secret;
        }
        if let Ok(hours) = env::var("TOKEN_TTL_HOURS") {
            config.token_ttl = Duration::hours(hours.parse()?);
        }
        config.seed_file = env::var("SEED_FILE").ok().filter(|v| !v.is_empty()).map(PathBuf::from);

        Ok(config)
    }
}
