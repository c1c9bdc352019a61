use super::*;
use crate::config::UpstreamTimeouts;

#[test]
fn unique_violation_code_is_conflict_regardless_of_message() {
    let body = r#"{"code":"23505","details":"Key (slug)=(terms-of-use) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"legal_pages_slug_key\""}"#;
    let err = classify_response(409, body);
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(err.message.contains("legal_pages_slug_key"));

    // Code alone decides; message wording is irrelevant.
    let reworded = r#"{"code":"23505","message":"chave duplicada"}"#;
    assert_eq!(classify_response(400, reworded).kind, ErrorKind::Conflict);
}

#[test]
fn message_mentioning_unique_without_code_is_not_conflict() {
    let body = r#"{"code":"22P02","message":"unique constraint mentioned in passing"}"#;
    assert_eq!(classify_response(400, body).kind, ErrorKind::Unknown);
}

#[test]
fn foreign_key_violation_is_not_a_slug_conflict() {
    let body = r#"{"code":"23503","message":"insert or update violates foreign key constraint"}"#;
    assert_eq!(classify_response(409, body).kind, ErrorKind::Unknown);
    assert_eq!(classify(409, None), ErrorKind::Conflict);
}

#[test]
fn parse_rows_accepts_null_content() {
    let body = r#"[{"id":"a","title":"Terms","slug":"terms","content":null,"icon":null,"external_reference":null,"created_at":"2025-03-01T10:00:00+00:00","updated_at":null}]"#;
    let rows = parse_rows(body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].content, "");
}

#[test]
fn classify_status_fallbacks() {
    assert_eq!(classify(404, None), ErrorKind::NotFound);
    assert_eq!(classify(406, Some("PGRST116")), ErrorKind::NotFound);
    assert_eq!(classify(401, Some("PGRST301")), ErrorKind::Unauthorized);
    assert_eq!(classify(403, None), ErrorKind::Unauthorized);
    assert_eq!(classify(503, None), ErrorKind::Transient);
    assert_eq!(classify(429, None), ErrorKind::Transient);
    assert_eq!(classify(400, Some("42P01")), ErrorKind::Unknown);
}

#[test]
fn classify_response_without_json_uses_status_message() {
    let err = classify_response(502, "<html>bad gateway</html>");
    assert_eq!(err.kind, ErrorKind::Transient);
    assert_eq!(err.message, "content service returned status 502");
}

#[test]
fn parse_rows_reads_postgrest_array() {
    let body = r#"[
        {"id":"b","title":"Terms","slug":"terms","content":"<p>x</p>","icon":null,"external_reference":null,"created_at":"2025-03-02T10:00:00+00:00","updated_at":"2025-03-02T10:00:00+00:00"},
        {"id":"a","title":"Privacy","slug":"privacy","content":"","icon":"Lock","external_reference":"LGPD","created_at":"2025-03-01T10:00:00+00:00","updated_at":null}
    ]"#;
    let rows = parse_rows(body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "b");
    assert_eq!(rows[1].icon.as_deref(), Some("Lock"));
}

#[test]
fn parse_rows_rejects_object_body() {
    let err = parse_rows(r#"{"message":"oops"}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unknown);
}

#[test]
fn ensure_affected_empty_array_is_not_found() {
    assert_eq!(ensure_affected("[]", "x").unwrap_err().kind, ErrorKind::NotFound);
    assert!(ensure_affected(r#"[{"id":"x"}]"#, "x").is_ok());
}

fn store() -> SupabaseStore {
    let client = SupabaseClient::new("https://p.supabase.co", "anon", UpstreamTimeouts { request_secs: 1, connect_secs: 1 })
        .unwrap();
    SupabaseStore::new(client, "cms")
}

#[test]
fn list_request_targets_schema_and_orders_newest_first() {
    let req = store()
        .request(Method::GET, ContentKind::Legal, "jwt")
        .query(&[("select", "*"), ("order", "created_at.desc")])
        .build()
        .unwrap();
    assert_eq!(req.url().path(), "/rest/v1/legal_pages");
    assert_eq!(req.url().query(), Some("select=*&order=created_at.desc"));
    assert_eq!(req.headers()["accept-profile"], "cms");
    assert!(req.headers().get("content-profile").is_none());
}

#[test]
fn write_request_uses_content_profile() {
    let req = store()
        .request(Method::PATCH, ContentKind::Faq, "jwt")
        .build()
        .unwrap();
    assert_eq!(req.url().path(), "/rest/v1/faqs");
    assert_eq!(req.headers()["content-profile"], "cms");
    assert_eq!(req.headers()["authorization"], "Bearer jwt");
}
