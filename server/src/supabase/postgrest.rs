//! PostgREST table adapter for content rows.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified from the HTTP status and the Postgres/PostgREST
//! error `code`, never from message text. The message is kept only so the
//! UI can show it.

use async_trait::async_trait;
use console_model::{ContentItem, ContentKind, ErrorKind};
use reqwest::Method;
use serde::Deserialize;

use super::SupabaseClient;
use crate::services::content::{ContentStore, StampedFields, StoreError};

const UNIQUE_VIOLATION: &str = "23505";
const NO_ROWS: &str = "PGRST116";
const JWT_EXPIRED: &str = "PGRST301";
const JWT_MISSING: &str = "PGRST302";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseStore {
    client: SupabaseClient,
    schema: String,
}

impl SupabaseStore {
    #[must_use]
    pub fn new(client: SupabaseClient, schema: impl Into<String>) -> Self {
        Self { client, schema: schema.into() }
    }

    fn table_path(kind: ContentKind) -> String {
        format!("/rest/v1/{}", kind.table())
    }

    /// Reads select the schema with `Accept-Profile`, writes with `Content-Profile`.
    fn request(&self, method: Method, kind: ContentKind, access_token: &str) -> reqwest::RequestBuilder {
        let profile_header = if method == Method::GET { "Accept-Profile" } else { "Content-Profile" };
        self.client
            .request(method, &Self::table_path(kind), Some(access_token))
            .header(profile_header, &self.schema)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            let err = classify_response(status, &body);
            tracing::warn!(status, kind = ?err.kind, message = %err.message, "content store request failed");
            Err(err)
        }
    }
}

#[async_trait]
impl ContentStore for SupabaseStore {
    async fn list(&self, access_token: &str, kind: ContentKind) -> Result<Vec<ContentItem>, StoreError> {
        let request = self
            .request(Method::GET, kind, access_token)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let body = self.send(request).await?;
        parse_rows(&body)
    }

    async fn insert(&self, access_token: &str, kind: ContentKind, row: &StampedFields) -> Result<(), StoreError> {
        let request = self
            .request(Method::POST, kind, access_token)
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(request).await.map(|_| ())
    }

    async fn update(
        &self,
        access_token: &str,
        kind: ContentKind,
        id: &str,
        row: &StampedFields,
    ) -> Result<(), StoreError> {
        let request = self
            .request(Method::PATCH, kind, access_token)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(row);
        let body = self.send(request).await?;
        ensure_affected(&body, id)
    }

    async fn delete(&self, access_token: &str, kind: ContentKind, id: &str) -> Result<(), StoreError> {
        let request = self
            .request(Method::DELETE, kind, access_token)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");
        let body = self.send(request).await?;
        ensure_affected(&body, id)
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[derive(Deserialize, Default)]
struct WireError {
    code: Option<String>,
    message: Option<String>,
}

fn transport_error(err: reqwest::Error) -> StoreError {
    StoreError::new(ErrorKind::Transient, format!("content service unreachable: {err}"))
}

/// Map a status + PostgREST error `code` onto the shared taxonomy.
///
/// A 409 only means a duplicate slug when no code says otherwise; foreign-key
/// violations also arrive as 409.
#[must_use]
pub(crate) fn classify(status: u16, code: Option<&str>) -> ErrorKind {
    match (status, code) {
        (_, Some(UNIQUE_VIOLATION)) | (409, None) => ErrorKind::Conflict,
        (_, Some(NO_ROWS)) | (404, _) => ErrorKind::NotFound,
        (_, Some(JWT_EXPIRED | JWT_MISSING)) | (401 | 403, _) => ErrorKind::Unauthorized,
        (408 | 429 | 500..=599, _) => ErrorKind::Transient,
        _ => ErrorKind::Unknown,
    }
}

pub(crate) fn classify_response(status: u16, body: &str) -> StoreError {
    let wire: WireError = serde_json::from_str(body).unwrap_or_default();
    let kind = classify(status, wire.code.as_deref());
    let message = wire
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("content service returned status {status}"));
    StoreError::new(kind, message)
}

pub(crate) fn parse_rows(body: &str) -> Result<Vec<ContentItem>, StoreError> {
    serde_json::from_str(body)
        .map_err(|e| StoreError::new(ErrorKind::Unknown, format!("unexpected content response: {e}")))
}

/// A filtered write that matched nothing returns `[]`.
pub(crate) fn ensure_affected(body: &str, id: &str) -> Result<(), StoreError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body).unwrap_or_default();
    if rows.is_empty() {
        return Err(StoreError::new(ErrorKind::NotFound, format!("no content item with id {id}")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "postgrest_test.rs"]
mod tests;
