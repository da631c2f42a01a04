/// Supplies the authenticated company's credentials to the controller.
pub trait SessionProvider: Send + Sync {
    /// Bearer token sent in the `token` header.
    fn token(&self) -> String;

    /// True while the identity behind the token is still being resolved.
    fn is_loading_identity(&self) -> bool {
        false
    }
}

/// A session with a pre-issued token and an already-resolved identity.
#[derive(Debug, Clone)]
pub struct StaticSession {
    token: String,
}

impl StaticSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SessionProvider for StaticSession {
    fn token(&self) -> String {
        self.token.clone()
    }
}
