use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root the endpoint paths are joined onto. Always ends with `/`.
    pub api_base_url: Url,
    pub company_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API URL is valid"),
            company_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads `API_BASE_URL`, `COMPANY_TOKEN` and `REQUEST_TIMEOUT_SECS`.
    /// Call `dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var("API_BASE_URL") {
            config.api_base_url = parse_base_url(&url)?;
        }
        if let Ok(token) = env::var("COMPANY_TOKEN") {
            if !token.trim().is_empty() {
                config.company_token = Some(token);
            }
        }
        if let Ok(secs) = env::var("REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ClientError::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {}", secs)))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.api_base_url = parse_base_url(url)?;
        Ok(self)
    }
}

/// Parses a base URL and appends a trailing `/` so relative paths nest under it.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
