//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two collaborator seams (auth + content storage) behind trait
//! objects, plus the cookie policy. The console owns no durable state.

use std::sync::Arc;

use crate::services::auth::AuthProvider;
use crate::services::content::ContentStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn ContentStore>,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn ContentStore>, cookie_secure: bool) -> Self {
        Self { auth, store, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
