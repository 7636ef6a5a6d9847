use super::*;

// =============================================================
// resolve_otp_mode
// =============================================================

#[test]
fn verification_flow_takes_precedence() {
    let mode = resolve_otp_mode(Some("v@example.com".to_owned()), Some("r@example.com".to_owned()));
    assert_eq!(mode, Some(OtpMode::VerifyEmail("v@example.com".to_owned())));
}

#[test]
fn reset_flow_when_only_reset_pending() {
    let mode = resolve_otp_mode(None, Some("r@example.com".to_owned()));
    assert_eq!(mode, Some(OtpMode::ResetPassword("r@example.com".to_owned())));
}

#[test]
fn no_pending_flow_resolves_to_none() {
    assert_eq!(resolve_otp_mode(None, None), None);
}

// =============================================================
// validate_otp_input
// =============================================================

#[test]
fn validate_otp_accepts_six_digits() {
    assert_eq!(validate_otp_input("123456"), Ok("123456".to_owned()));
    assert_eq!(validate_otp_input("  123456  "), Ok("123456".to_owned()));
}

#[test]
fn validate_otp_rejects_wrong_length() {
    assert_eq!(validate_otp_input("12345"), Err("Enter the 6-digit code."));
    assert_eq!(validate_otp_input("1234567"), Err("Enter the 6-digit code."));
    assert_eq!(validate_otp_input(""), Err("Enter the 6-digit code."));
}

#[test]
fn validate_otp_rejects_non_digits() {
    assert_eq!(validate_otp_input("12a456"), Err("Enter the 6-digit code."));
    assert_eq!(validate_otp_input("ABCDEF"), Err("Enter the 6-digit code."));
}
