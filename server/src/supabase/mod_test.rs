use super::*;

fn client() -> SupabaseClient {
    SupabaseClient::new(
        "https://project.supabase.co/",
        "anon",
        UpstreamTimeouts { request_secs: 1, connect_secs: 1 },
    )
    .unwrap()
}

#[test]
fn url_joins_without_double_slash() {
    assert_eq!(client().url("/auth/v1/user"), "https://project.supabase.co/auth/v1/user");
}

#[test]
fn request_uses_anon_key_as_default_bearer() {
    let req = client()
        .request(reqwest::Method::GET, "/rest/v1/faqs", None)
        .build()
        .unwrap();
    assert_eq!(req.headers()["apikey"], "anon");
    assert_eq!(req.headers()["authorization"], "Bearer anon");
}

#[test]
fn request_prefers_session_token_as_bearer() {
    let req = client()
        .request(reqwest::Method::GET, "/rest/v1/faqs", Some("user-jwt"))
        .build()
        .unwrap();
    assert_eq!(req.headers()["authorization"], "Bearer user-jwt");
}
