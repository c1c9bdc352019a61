#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;
mod supabase;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ConsoleConfig;
use crate::supabase::{SupabaseAuth, SupabaseClient, SupabaseStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = match SupabaseClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build upstream http client");
            std::process::exit(1);
        }
    };
    let auth = Arc::new(SupabaseAuth::new(client.clone()));
    let store = Arc::new(SupabaseStore::new(client, config.content_schema.clone()));
    let state = state::AppState::new(auth, store, config.cookie_secure);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, schema = %config.content_schema, "content console listening");
    axum::serve(listener, app).await.expect("server failed");
}
