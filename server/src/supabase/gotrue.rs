//! GoTrue auth adapter.
//!
//! Thin HTTP wrapper for `/auth/v1/token`, `/auth/v1/user` and
//! `/auth/v1/logout`. Pure parsing in `parse_*` functions for testability.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use super::SupabaseClient;
use crate::services::auth::{AuthError, AuthProvider, AuthSession, SessionUser};

const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const USER_PATH: &str = "/auth/v1/user";
const LOGOUT_PATH: &str = "/auth/v1/logout";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseAuth {
    client: SupabaseClient,
}

impl SupabaseAuth {
    #[must_use]
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

async fn read(response: reqwest::Response) -> Result<(u16, String), AuthError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Unavailable(e.to_string()))?;
    Ok((status, body))
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn get_session(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError> {
        let response = self
            .client
            .request(Method::GET, USER_PATH, Some(access_token))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        let (status, body) = read(response).await?;
        parse_user_response(status, &body)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .request(Method::POST, TOKEN_PATH, None)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        let (status, body) = read(response).await?;
        parse_token_response(status, &body)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .request(Method::POST, LOGOUT_PATH, Some(access_token))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        let (status, body) = read(response).await?;
        parse_logout_response(status, &body)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<WireUser> for SessionUser {
    fn from(user: WireUser) -> Self {
        Self { id: user.id, email: user.email }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    user: WireUser,
}

/// GoTrue has shipped several error shapes; take the most specific text.
#[derive(Deserialize, Default)]
struct WireError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract a human-readable message from a GoTrue error body.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let wire: WireError = serde_json::from_str(body).unwrap_or_default();
    wire.error_description
        .or(wire.msg)
        .or(wire.message)
        .or(wire.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("auth service returned status {status}"))
}

fn status_error(status: u16, body: &str) -> AuthError {
    let message = error_message(status, body);
    match status {
        400 | 401 | 403 | 422 => AuthError::Rejected(message),
        408 | 429 | 500..=599 => AuthError::Unavailable(message),
        _ => AuthError::Unexpected(message),
    }
}

pub(crate) fn parse_token_response(status: u16, body: &str) -> Result<AuthSession, AuthError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    let token: TokenResponse =
        serde_json::from_str(body).map_err(|e| AuthError::Unexpected(format!("token response: {e}")))?;
    Ok(AuthSession { access_token: token.access_token, expires_in: token.expires_in, user: token.user.into() })
}

/// `401`/`403` on `/user` means the token is not (or no longer) a session.
pub(crate) fn parse_user_response(status: u16, body: &str) -> Result<Option<SessionUser>, AuthError> {
    match status {
        200..=299 => {
            let user: WireUser =
                serde_json::from_str(body).map_err(|e| AuthError::Unexpected(format!("user response: {e}")))?;
            Ok(Some(user.into()))
        }
        401 | 403 => Ok(None),
        _ => Err(status_error(status, body)),
    }
}

/// An already-invalid token counts as signed out.
pub(crate) fn parse_logout_response(status: u16, body: &str) -> Result<(), AuthError> {
    match status {
        200..=299 | 401 | 403 | 404 => Ok(()),
        _ => Err(status_error(status, body)),
    }
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;
