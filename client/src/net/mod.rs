//! Networking seams between the UI state machines and `console-server`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never call HTTP directly. They drive state through the traits
//! below, which `api::HttpApi` implements over `gloo-net` in the browser and
//! which tests replace with in-memory fakes.

pub mod api;

use console_model::{ApiErrorBody, ContentFields, ContentItem, ContentKind, SessionView};

pub type ApiResult<T> = Result<T, ApiErrorBody>;

/// Session lookup used by the session gate.
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// `Ok(None)` when the browser has no live session.
    async fn get_session(&self) -> ApiResult<Option<SessionView>>;
}

/// Password sign-in and sign-out.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<()>;

    async fn sign_out(&self) -> ApiResult<()>;
}

/// CRUD over one content table at a time.
#[allow(async_fn_in_trait)]
pub trait ContentService {
    /// All items of `kind`, newest first.
    async fn list(&self, kind: ContentKind) -> ApiResult<Vec<ContentItem>>;

    async fn create(&self, kind: ContentKind, fields: &ContentFields) -> ApiResult<()>;

    async fn update(&self, kind: ContentKind, id: &str, fields: &ContentFields) -> ApiResult<()>;

    async fn delete(&self, kind: ContentKind, id: &str) -> ApiResult<()>;
}
