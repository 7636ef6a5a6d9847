use super::*;

#[test]
fn validate_signup_input_accepts_complete_form() {
    assert_eq!(
        validate_signup_input(" Ada Lovelace ", " ada@example.com ", "password1", "password1"),
        Ok((
            "Ada Lovelace".to_owned(),
            "ada@example.com".to_owned(),
            "password1".to_owned()
        ))
    );
}

#[test]
fn validate_signup_input_requires_all_fields() {
    assert_eq!(
        validate_signup_input("", "a@b.com", "password1", "password1"),
        Err("Enter your name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Ada", "", "password1", "password1"),
        Err("Enter your name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Ada", "a@b.com", "", ""),
        Err("Enter your name, email, and password.")
    );
}

#[test]
fn validate_signup_input_enforces_minimum_length() {
    assert_eq!(
        validate_signup_input("Ada", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_signup_input_requires_matching_passwords() {
    assert_eq!(
        validate_signup_input("Ada", "a@b.com", "password1", "password2"),
        Err("Passwords do not match.")
    );
}
