//! Session gate state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate asks the server once per mount whether the browser has a live
//! session. There is no retry and no periodic re-check: anything other than
//! a confirmed session sends the user back to the login route.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use console_model::SessionView;

use crate::net::{AuthClient, SessionProvider};

/// Gate lifecycle: `Checking` until the single lookup resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Authenticated(SessionView),
    Redirect,
}

/// Run the one session lookup and decide where the gate goes.
///
/// Lookup failures count as "no session" so the gate never hangs.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn check_session<P: SessionProvider>(provider: &P) -> GateState {
    match provider.get_session().await {
        Ok(Some(view)) => GateState::Authenticated(view),
        Ok(None) => GateState::Redirect,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("session lookup failed: {e}");
            GateState::Redirect
        }
    }
}

/// Sign out, then call `navigate` whether or not the server call succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn sign_out<A, F>(auth: &A, navigate: F)
where
    A: AuthClient,
    F: FnOnce(),
{
    if let Err(e) = auth.sign_out().await {
        #[cfg(feature = "hydrate")]
        log::warn!("sign-out failed: {e}");
    }
    navigate();
}
