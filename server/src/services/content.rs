//! Content service: list/create/update/delete for one content kind.
//!
//! ARCHITECTURE
//! ============
//! Routes call these functions; these functions call the [`ContentStore`]
//! seam. The only logic owned here is input validation and stamping
//! `updated_at`. Uniqueness and atomicity belong to the hosted table service.

use console_model::{ContentFields, ContentItem, ContentKind, ErrorKind};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// =============================================================================
// STORE SEAM
// =============================================================================

/// Storage failure, classified at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub kind: ErrorKind,
    /// Human-readable message from the hosted service (or the adapter).
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Column values plus the write timestamp, as sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampedFields {
    #[serde(flatten)]
    pub fields: ContentFields,
    pub updated_at: String,
}

#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// All rows of `kind`, newest `created_at` first.
    async fn list(&self, access_token: &str, kind: ContentKind) -> Result<Vec<ContentItem>, StoreError>;

    async fn insert(&self, access_token: &str, kind: ContentKind, row: &StampedFields) -> Result<(), StoreError>;

    async fn update(
        &self,
        access_token: &str,
        kind: ContentKind,
        id: &str,
        row: &StampedFields,
    ) -> Result<(), StoreError>;

    async fn delete(&self, access_token: &str, kind: ContentKind, id: &str) -> Result<(), StoreError>;
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Format `now` the way the hosted service stores timestamps.
#[must_use]
pub fn format_timestamp(now: OffsetDateTime) -> String {
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}

fn stamp(fields: ContentFields) -> Result<StampedFields, StoreError> {
    fields
        .validate()
        .map_err(|msg| StoreError::new(ErrorKind::Validation, msg))?;
    Ok(StampedFields { fields, updated_at: format_timestamp(OffsetDateTime::now_utc()) })
}

pub async fn list(
    store: &dyn ContentStore,
    access_token: &str,
    kind: ContentKind,
) -> Result<Vec<ContentItem>, StoreError> {
    store.list(access_token, kind).await
}

/// Validate, stamp and insert a new row.
pub async fn create(
    store: &dyn ContentStore,
    access_token: &str,
    kind: ContentKind,
    fields: ContentFields,
) -> Result<(), StoreError> {
    let row = stamp(fields)?;
    store.insert(access_token, kind, &row).await
}

/// Validate, stamp and overwrite the row with `id`.
pub async fn update(
    store: &dyn ContentStore,
    access_token: &str,
    kind: ContentKind,
    id: &str,
    fields: ContentFields,
) -> Result<(), StoreError> {
    let row = stamp(fields)?;
    store.update(access_token, kind, id, &row).await
}

pub async fn delete(
    store: &dyn ContentStore,
    access_token: &str,
    kind: ContentKind,
    id: &str,
) -> Result<(), StoreError> {
    store.delete(access_token, kind, id).await
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
