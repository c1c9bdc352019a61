//! Auth routes: password sign-in, session lookup, sign-out.
//!
//! The hosted auth service issues and validates tokens; these handlers only
//! move the token between the service and an HttpOnly cookie.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use console_model::{ErrorKind, LoginRequest, SessionView};
use time::Duration;

use crate::routes::error::ApiError;
use crate::services::auth::SessionUser;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "console_session";

fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs.max(0)))
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(String::new(), 0, secure)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::unauthorized());
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .auth
            .get_session(token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "session lookup failed");
                ApiError::from(e)
            })?
            .ok_or_else(ApiError::unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Both fields required; no format or strength checks.
pub(crate) fn validate_login(body: &LoginRequest) -> Result<(), ApiError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::new(ErrorKind::Validation, "Email and password are required."));
    }
    Ok(())
}

/// `POST /api/auth/login`: password sign-in; sets the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    validate_login(&body)?;
    let email = body.email.trim();

    let session = state
        .auth
        .sign_in_with_password(email, &body.password)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "sign-in rejected");
            ApiError::from(e)
        })?;

    tracing::info!(user_id = %session.user.id, "signed in");
    let cookie = session_cookie(session.access_token, session.expires_in, state.cookie_secure);
    Ok((jar.add(cookie), StatusCode::NO_CONTENT))
}

/// `GET /api/auth/session`: current session view, or 401.
pub async fn session(auth: AuthUser) -> Json<SessionView> {
    Json(auth.user.to_view())
}

/// `POST /api/auth/logout`: best-effort upstream sign-out, cookie always cleared.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar
        .get(COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();
    if !token.is_empty() {
        match state.auth.sign_out(&token).await {
            Ok(()) => tracing::info!("signed out"),
            Err(e) => tracing::warn!(error = %e, "upstream sign-out failed; clearing cookie anyway"),
        }
    }

    (jar.add(cleared_cookie(state.cookie_secure)), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
