/// An authenticated session. Held in memory only; closing the app (or any
/// 401 from the backend) ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: String,
}

impl Session {
    pub fn new(token: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Display name shown in the settings drawer.
    pub fn user(&self) -> &str {
        &self.user
    }
}
