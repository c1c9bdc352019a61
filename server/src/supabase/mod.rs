//! Supabase-compatible adapters for the auth and content seams.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` (timeouts from config) is shared by the GoTrue auth
//! adapter and the PostgREST table adapter. Both send the anon key as
//! `apikey`; user-scoped calls add the session token as a bearer so row-level
//! security applies to the signed-in admin.

pub mod gotrue;
pub mod postgrest;

use std::time::Duration;

use crate::config::{ConsoleConfig, UpstreamTimeouts};

pub use gotrue::SupabaseAuth;
pub use postgrest::SupabaseStore;

/// Connection details shared by both adapters.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Build the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS/HTTP client cannot be built.
    pub fn new(base_url: &str, anon_key: &str, timeouts: UpstreamTimeouts) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Build from parsed console config.
    ///
    /// # Errors
    ///
    /// See [`SupabaseClient::new`].
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.supabase_url, &config.supabase_anon_key, config.timeouts)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request builder carrying `apikey` and a bearer token.
    ///
    /// Anonymous calls (sign-in) use the anon key as the bearer.
    fn request(&self, method: reqwest::Method, path: &str, bearer: Option<&str>) -> reqwest::RequestBuilder {
        let token = bearer.unwrap_or(&self.anon_key);
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
