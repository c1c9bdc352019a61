//! Shared content model for the admin console.
//!
//! This crate owns the JSON shapes exchanged between `console-ui` (browser)
//! and `console-server` (API + SSR host). The server forwards the same
//! shapes to the hosted table service, so field names follow the column
//! names of the `legal_pages`, `blog_posts` and `faqs` tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// CONTENT KIND
// =============================================================================

/// Error returned when a route segment does not name a content kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind: {0}")]
pub struct UnknownKind(pub String);

/// The content types managed by the console. All share one record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Terms of use, privacy policy and similar documents.
    Legal,
    /// Blog posts.
    Blog,
    /// Frequently asked questions.
    Faq,
}

impl ContentKind {
    /// Every kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::Blog, Self::Faq, Self::Legal];

    /// Table name in the hosted content schema.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Legal => "legal_pages",
            Self::Blog => "blog_posts",
            Self::Faq => "faqs",
        }
    }

    /// URL segment used by both the dashboard routes and the JSON API.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Blog => "blog",
            Self::Faq => "faqs",
        }
    }

    /// Human-readable section name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Legal => "Legal Pages",
            Self::Blog => "Blog",
            Self::Faq => "FAQs",
        }
    }

    /// Singular noun for a record of this kind.
    #[must_use]
    pub fn item_noun(self) -> &'static str {
        match self {
            Self::Legal => "Document",
            Self::Blog => "Post",
            Self::Faq => "Question",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legal" => Ok(Self::Legal),
            "blog" => Ok(Self::Blog),
            "faqs" | "faq" => Ok(Self::Faq),
            other => Err(UnknownKind(other.to_owned())),
        }
    }
}

// =============================================================================
// CONTENT ITEM
// =============================================================================

/// A persisted content record as returned by the table service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique record identifier (UUID string).
    pub id: String,
    pub title: String,
    /// Public URL segment. Unique per table.
    pub slug: String,
    /// HTML body produced by the rich-text editor. A `null` column reads as
    /// an empty body.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Icon name shown next to the item on the public site.
    #[serde(default)]
    pub icon: Option<String>,
    /// Free-form source or citation string.
    #[serde(default)]
    pub external_reference: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last write, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Column values written on insert and update.
///
/// Optional columns serialize as `null` when empty so an edit can clear them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFields {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub icon: Option<String>,
    pub external_reference: Option<String>,
}

impl ContentFields {
    /// Title and slug are the only required columns.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first empty required field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required.");
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required.");
        }
        Ok(())
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Editable form mirror of a [`ContentItem`]. Every field is plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub icon: String,
    pub external_reference: String,
}

impl ContentDraft {
    /// Seed a draft from an existing item's current values.
    #[must_use]
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            title: item.title.clone(),
            slug: item.slug.clone(),
            content: item.content.clone(),
            icon: item.icon.clone().unwrap_or_default(),
            external_reference: item.external_reference.clone().unwrap_or_default(),
        }
    }

    /// Build the write payload; empty optional fields become `None`.
    #[must_use]
    pub fn to_fields(&self) -> ContentFields {
        ContentFields {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            icon: non_empty(&self.icon),
            external_reference: non_empty(&self.external_reference),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

// =============================================================================
// SESSION + AUTH
// =============================================================================

/// Browser-visible view of an authenticated session. The token itself never
/// leaves the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub user_id: String,
    pub email: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Typed failure taxonomy shared by the server adapters and the UI.
///
/// Adapters classify hosted-service failures into one of these at the
/// boundary; nothing downstream inspects message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing, expired or rejected credentials.
    Unauthorized,
    /// Request rejected before reaching the hosted service.
    Validation,
    /// A uniqueness constraint was violated (duplicate slug).
    Conflict,
    /// The addressed record does not exist.
    NotFound,
    /// Network failure, timeout or upstream 5xx.
    Transient,
    Unknown,
}

/// JSON error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiErrorBody {
    pub code: ErrorKind,
    pub message: String,
}

impl ApiErrorBody {
    #[must_use]
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
