use super::domain::{Session, SessionToken, User};

/// Authentication/session provider seam.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self, token: &SessionToken) -> Result<Option<User>, SessionError>;
    fn logout(&self, token: &SessionToken) -> Result<(), SessionError>;

    /// Resolves an optional bearer token into the session handed to views.
    fn session(&self, token: Option<&SessionToken>) -> Result<Session, SessionError> {
        let user = match token {
            Some(token) => self.current_user(token)?,
            None => None,
        };
        Ok(user.map(Session::for_user).unwrap_or_default())
    }
}

/// Issues sessions for demo sign-ins; real login lives with the auth provider.
pub trait SessionIssuer: SessionProvider {
    fn sign_in(&self, user: User) -> Result<SessionToken, SessionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session expired")]
    Expired,
    #[error("invalid sign-in: {0}")]
    InvalidUser(String),
    #[error("session provider unavailable: {0}")]
    Unavailable(String),
}
