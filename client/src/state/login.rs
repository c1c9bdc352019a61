//! Login form state.
//!
//! The form is a small state machine: idle, busy while the sign-in request is
//! in flight, then either back to idle with the service's message or done
//! with a success notice. Navigation to the dashboard happens exactly once,
//! from the driver, when a submission succeeds.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::{ApiResult, AuthClient};
use crate::state::StateCell;

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful, redirecting...";
pub const MISSING_CREDENTIALS: &str = "Email and password are required.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// A sign-in request is in flight, or has succeeded and navigation is pending.
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the inline message shown when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

impl LoginForm {
    /// Start a submission and return the credentials to send.
    ///
    /// Returns `None` (and sends nothing) while another submission is in
    /// flight or when a field is empty.
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if self.busy {
            return None;
        }
        match validate_login_input(&self.email, &self.password) {
            Ok(credentials) => {
                self.busy = true;
                self.error = None;
                self.notice = None;
                Some(credentials)
            }
            Err(msg) => {
                self.error = Some(msg.to_owned());
                None
            }
        }
    }

    /// Record the outcome. Returns `true` when the caller should navigate.
    ///
    /// Fields are left as typed on failure.
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.notice = Some(LOGIN_SUCCESS_NOTICE.to_owned());
                true
            }
            Err(e) => {
                self.busy = false;
                self.error = Some(e.message);
                false
            }
        }
    }
}

/// Submit the form through `auth`, calling `navigate` once on success.
pub async fn submit_login<A, C, F>(auth: &A, form: &C, navigate: F)
where
    A: AuthClient,
    C: StateCell<LoginForm>,
    F: FnOnce(),
{
    let Some(Some((email, password))) = form.mutate(LoginForm::begin_submit) else {
        return;
    };
    let result = auth.sign_in(&email, &password).await;
    if form.mutate(|f| f.finish_submit(result)) == Some(true) {
        navigate();
    }
}
