//! REST API client for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with an `Unknown` error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failing responses are decoded into the shared `ApiErrorBody`. When the
//! body is not the server's JSON error shape (a proxy page, an empty 502),
//! the status alone picks the error kind.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use console_model::{ApiErrorBody, ContentFields, ContentItem, ContentKind, ErrorKind, SessionView};

use super::{ApiResult, AuthClient, ContentService, SessionProvider};

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(kind: ContentKind) -> String {
    format!("/api/content/{}", kind.segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(kind: ContentKind, id: &str) -> String {
    format!("/api/content/{}/{id}", kind.segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        400 | 422 => ErrorKind::Validation,
        401 | 403 => ErrorKind::Unauthorized,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        408 | 429 | 500..=599 => ErrorKind::Transient,
        _ => ErrorKind::Unknown,
    }
}

/// Decode a failing response body, falling back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn decode_error(status: u16, body: &str) -> ApiErrorBody {
    serde_json::from_str::<ApiErrorBody>(body)
        .unwrap_or_else(|_| ApiErrorBody::new(kind_for_status(status), format!("request failed: {status}")))
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(detail: &str) -> ApiErrorBody {
    ApiErrorBody::new(ErrorKind::Transient, format!("network error: {detail}"))
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiErrorBody {
    ApiErrorBody::new(ErrorKind::Unknown, "not available on server")
}

#[cfg(feature = "hydrate")]
async fn finish(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> ApiResult<gloo_net::http::Response> {
    let resp = sent.map_err(|e| network_error(&e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(decode_error(status, &body))
}

#[cfg(feature = "hydrate")]
fn json_request(
    builder: gloo_net::http::RequestBuilder,
    payload: &impl serde::Serialize,
) -> ApiResult<gloo_net::http::Request> {
    builder
        .json(payload)
        .map_err(|e| ApiErrorBody::new(ErrorKind::Unknown, e.to_string()))
}

/// Browser implementation of every client seam, backed by the JSON API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl SessionProvider for HttpApi {
    async fn get_session(&self) -> ApiResult<Option<SessionView>> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::get("/api/auth/session").send().await;
            match finish(sent).await {
                Ok(resp) => resp
                    .json::<SessionView>()
                    .await
                    .map(Some)
                    .map_err(|e| ApiErrorBody::new(ErrorKind::Unknown, e.to_string())),
                Err(e) if e.code == ErrorKind::Unauthorized => Ok(None),
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }
}

impl AuthClient for HttpApi {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let payload = console_model::LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let req = json_request(gloo_net::http::Request::post("/api/auth/login"), &payload)?;
            finish(req.send().await).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_side())
        }
    }

    async fn sign_out(&self) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::post("/api/auth/logout").send().await;
            finish(sent).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }
}

impl ContentService for HttpApi {
    async fn list(&self, kind: ContentKind) -> ApiResult<Vec<ContentItem>> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::get(&collection_endpoint(kind)).send().await;
            finish(sent)
                .await?
                .json::<Vec<ContentItem>>()
                .await
                .map_err(|e| ApiErrorBody::new(ErrorKind::Unknown, e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
            Err(server_side())
        }
    }

    async fn create(&self, kind: ContentKind, fields: &ContentFields) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let req = json_request(gloo_net::http::Request::post(&collection_endpoint(kind)), fields)?;
            finish(req.send().await).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, fields);
            Err(server_side())
        }
    }

    async fn update(&self, kind: ContentKind, id: &str, fields: &ContentFields) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let req = json_request(gloo_net::http::Request::put(&item_endpoint(kind, id)), fields)?;
            finish(req.send().await).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, id, fields);
            Err(server_side())
        }
    }

    async fn delete(&self, kind: ContentKind, id: &str) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::delete(&item_endpoint(kind, id)).send().await;
            finish(sent).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, id);
            Err(server_side())
        }
    }
}
