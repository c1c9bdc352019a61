//! Content CRUD routes, one family per content kind.
//!
//! Every handler requires a session; the session token is forwarded to the
//! table service so its row-level security sees the signed-in admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use console_model::{ContentFields, ContentItem, ContentKind, ErrorKind};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::error::ApiError;
use crate::services::content;
use crate::state::AppState;

pub(crate) fn parse_kind(segment: &str) -> Result<ContentKind, ApiError> {
    segment
        .parse::<ContentKind>()
        .map_err(|e| ApiError::new(ErrorKind::NotFound, e.to_string()))
}

/// `GET /api/content/{kind}`: all items, newest first.
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ContentItem>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let items = content::list(state.store.as_ref(), &auth.token, kind).await?;
    Ok(Json(items))
}

/// `POST /api/content/{kind}`: insert a new item.
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(kind): Path<String>,
    Json(fields): Json<ContentFields>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    content::create(state.store.as_ref(), &auth.token, kind, fields).await?;
    tracing::info!(%kind, user_id = %auth.user.id, "content item created");
    Ok(StatusCode::CREATED)
}

/// `PUT /api/content/{kind}/{id}`: overwrite an item's fields.
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(fields): Json<ContentFields>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    content::update(state.store.as_ref(), &auth.token, kind, &id.to_string(), fields).await?;
    tracing::info!(%kind, %id, user_id = %auth.user.id, "content item updated");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/content/{kind}/{id}`: remove an item.
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    content::delete(state.store.as_ref(), &auth.token, kind, &id.to_string()).await?;
    tracing::info!(%kind, %id, user_id = %auth.user.id, "content item deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
