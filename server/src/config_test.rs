use super::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers hold `ENV_LOCK` so no other test mutates these variables.
unsafe fn clear_console_env() {
    unsafe {
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
        std::env::remove_var("CONTENT_SCHEMA");
        std::env::remove_var("PORT");
        std::env::remove_var("COOKIE_SECURE");
        std::env::remove_var("SITE_URL");
        std::env::remove_var("UPSTREAM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("UPSTREAM_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("SUPABASE_URL", "https://project.supabase.co/");
        std::env::set_var("SUPABASE_ANON_KEY", "anon-key");
    }

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.supabase_url, "https://project.supabase.co");
    assert_eq!(cfg.supabase_anon_key, "anon-key");
    assert_eq!(cfg.content_schema, DEFAULT_CONTENT_SCHEMA);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.cookie_secure);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS
        }
    );

    unsafe { clear_console_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("SUPABASE_URL", "http://localhost:54321");
        std::env::set_var("SUPABASE_ANON_KEY", "k");
        std::env::set_var("CONTENT_SCHEMA", "public");
        std::env::set_var("PORT", "8080");
        std::env::set_var("COOKIE_SECURE", "yes");
        std::env::set_var("UPSTREAM_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("UPSTREAM_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.content_schema, "public");
    assert_eq!(cfg.port, 8080);
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 30, connect_secs: 2 });

    unsafe { clear_console_env() };
}

#[test]
fn from_env_infers_secure_cookie_from_https_site_url() {
    let _guard = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("SUPABASE_URL", "http://localhost:54321");
        std::env::set_var("SUPABASE_ANON_KEY", "k");
        std::env::set_var("SITE_URL", "https://admin.example.com");
    }

    assert!(ConsoleConfig::from_env().unwrap().cookie_secure);

    unsafe { clear_console_env() };
}

#[test]
fn from_env_missing_url_is_error() {
    let _guard = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("SUPABASE_ANON_KEY", "k");
    }

    assert_eq!(ConsoleConfig::from_env(), Err(ConfigError::Missing("SUPABASE_URL")));

    unsafe { clear_console_env() };
}

#[test]
fn from_env_blank_anon_key_is_error() {
    let _guard = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("SUPABASE_URL", "http://localhost:54321");
        std::env::set_var("SUPABASE_ANON_KEY", "  ");
    }

    assert_eq!(ConsoleConfig::from_env(), Err(ConfigError::Missing("SUPABASE_ANON_KEY")));

    unsafe { clear_console_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(
        parse_port(Some("http")),
        Err(ConfigError::Invalid { key: "PORT", value: "http".to_owned() })
    );
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

// =============================================================================
// env_bool: unique env var names avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_and_false_variants() {
    for (i, (val, expected)) in [("1", true), ("ON", true), ("no", false), (" false ", false)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_CONSOLE_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(*expected), "unexpected result for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_is_none() {
    let key = "__TEST_CONSOLE_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_CONSOLE_EB_UNSET__"), None);
}
