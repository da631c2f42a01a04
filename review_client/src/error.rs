use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Token is not a valid header value")]
    InvalidToken,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Text the server supplied alongside the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Http { message, .. } | ClientError::Rejected { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
