use super::*;

// =============================================================
// Request serialization — field names are the backend contract.
// =============================================================

#[test]
fn signup_request_serializes_camel_case() {
    let req = SignupRequest {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "email": "a@b.com",
            "password": "secret",
            "fullName": "Ada Lovelace",
        })
    );
}

#[test]
fn refresh_request_serializes_camel_case() {
    let req = RefreshTokenRequest {
        token: "t1".to_owned(),
        refresh_token: "r1".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "token": "t1", "refreshToken": "r1" }));
}

#[test]
fn callback_request_uses_capitalized_code_field() {
    let req = CallbackRequest { code: "abc".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "Code": "abc" }));
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn auth_response_parses_full_success_payload() {
    let body = r#"{
        "success": true,
        "message": "Login successful",
        "token": "jwt",
        "refreshToken": "refresh",
        "tokenExpiry": "2030-01-01T00:00:00Z",
        "user": {
            "id": 7,
            "email": "a@b.com",
            "fullName": "Ada Lovelace",
            "createdAt": "2029-01-01T00:00:00Z",
            "lastLoginAt": "2029-06-01T00:00:00Z"
        }
    }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("jwt"));
    let user = resp.user.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.profile_picture_url, None);
}

#[test]
fn auth_response_parses_failure_without_tokens() {
    let body = r#"{ "success": false, "message": "Invalid credentials" }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message, "Invalid credentials");
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn auth_response_tolerates_missing_message() {
    let body = r#"{ "success": true }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    assert!(resp.message.is_empty());
}

#[test]
fn refresh_response_parses_without_expiry() {
    let body = r#"{ "token": "t2", "refreshToken": "r2" }"#;
    let resp: RefreshResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "t2");
    assert_eq!(resp.refresh_token, "r2");
    assert_eq!(resp.token_expiry, None);
}

#[test]
fn user_dto_round_trips_optional_oauth_provider() {
    let user = UserDto {
        id: 1,
        email: "a@b.com".to_owned(),
        full_name: "Ada".to_owned(),
        created_at: "2029-01-01T00:00:00Z".to_owned(),
        last_login_at: None,
        profile_picture_url: Some("https://cdn.example/a.png".to_owned()),
        o_auth_provider: Some("github".to_owned()),
    };
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"oAuthProvider\":\"github\""));
    let back: UserDto = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}
