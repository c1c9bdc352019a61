//! Auth collaborator seam.
//!
//! DESIGN
//! ======
//! The hosted service owns sessions end to end: it issues the token, decides
//! expiry, and validates it on every request. The console only needs three
//! operations, modelled as an injectable trait so routes can be exercised
//! against an in-memory fake.

use console_model::{ErrorKind, SessionView};

/// Identity attached to a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
}

impl SessionUser {
    #[must_use]
    pub fn to_view(&self) -> SessionView {
        SessionView { user_id: self.id.clone(), email: self.email.clone() }
    }
}

/// Token pair issued by a successful password sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    /// Seconds until `access_token` expires.
    pub expires_in: i64,
    pub user: SessionUser,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credentials rejected; carries the hosted service's message verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected auth response: {0}")]
    Unexpected(String),
}

impl AuthError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected(_) => ErrorKind::Unauthorized,
            Self::Unavailable(_) => ErrorKind::Transient,
            Self::Unexpected(_) => ErrorKind::Unknown,
        }
    }
}

#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a token to its user. `Ok(None)` means no active session.
    async fn get_session(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Invalidate the session server-side.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
