use super::*;
use crate::net::types::UserDto;

fn credentials_with_user() -> Credentials {
    Credentials {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        token_expiry: "2030-01-01T00:00:00Z".to_owned(),
        user: Some(UserDto {
            id: 7,
            email: "ada@example.com".to_owned(),
            full_name: "Ada Lovelace".to_owned(),
            created_at: "2029-01-01T00:00:00Z".to_owned(),
            last_login_at: None,
            profile_picture_url: None,
            o_auth_provider: None,
        }),
    }
}

// =============================================================
// session_request_body
// =============================================================

#[test]
fn request_body_projects_cached_profile() {
    let body = session_request_body(&credentials_with_user());
    assert_eq!(
        body,
        serde_json::json!({
            "user": { "id": "7", "email": "ada@example.com", "name": "Ada Lovelace" },
            "accessToken": "access-1",
            "refreshToken": "refresh-1",
            "tokenExpiry": "2030-01-01T00:00:00Z",
        })
    );
}

#[test]
fn request_body_without_profile_sends_empty_identity() {
    let mut credentials = credentials_with_user();
    credentials.user = None;
    let body = session_request_body(&credentials);
    assert_eq!(body["user"]["id"], "");
    assert_eq!(body["accessToken"], "access-1");
}

// =============================================================
// parse_session_body
// =============================================================

#[test]
fn parse_accepts_full_session() {
    let body = r#"{
        "user": { "id": "7", "email": "ada@example.com", "name": "Ada Lovelace" },
        "accessToken": "access-1",
        "refreshToken": "refresh-1",
        "tokenExpiry": "2030-01-01T00:00:00Z"
    }"#;
    let session = parse_session_body(body).unwrap();
    assert_eq!(session.user.email, "ada@example.com");
    assert_eq!(session.access_token, "access-1");
}

#[test]
fn parse_treats_null_as_anonymous() {
    assert_eq!(parse_session_body("null"), None);
}

#[test]
fn parse_treats_empty_body_as_anonymous() {
    assert_eq!(parse_session_body(""), None);
    assert_eq!(parse_session_body("   "), None);
}

#[test]
fn parse_treats_garbage_as_anonymous() {
    assert_eq!(parse_session_body("{oops"), None);
    assert_eq!(parse_session_body("{}"), None);
}
