//! Console configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and then builds [`ConsoleConfig`] once at
//! startup. Missing hosted-service credentials are fatal; everything else
//! has a default.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_SCHEMA: &str = "cms";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL of the hosted auth + table service, without trailing slash.
    pub supabase_url: String,
    /// Public (anon) API key sent as `apikey` on every upstream request.
    pub supabase_anon_key: String,
    /// Schema holding the content tables.
    pub content_schema: String,
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    pub timeouts: UpstreamTimeouts,
}

impl ConsoleConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `CONTENT_SCHEMA`: default `cms`
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool; inferred from an `https://` `SITE_URL` when unset
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 15
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = required("SUPABASE_URL")?.trim_end_matches('/').to_owned();
        let supabase_anon_key = required("SUPABASE_ANON_KEY")?;
        let content_schema = std::env::var("CONTENT_SCHEMA")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_SCHEMA.to_owned());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or_else(|| {
            std::env::var("SITE_URL")
                .map(|url| url.starts_with("https://"))
                .unwrap_or(false)
        });
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("UPSTREAM_REQUEST_TIMEOUT_SECS", DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { supabase_url, supabase_anon_key, content_schema, port, cookie_secure, timeouts })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
