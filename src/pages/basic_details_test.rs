use super::*;

#[test]
fn validate_org_input_trims_fields() {
    assert_eq!(
        validate_org_input("  Acme  ", "  ops@acme.example  "),
        Ok(("Acme".to_owned(), "ops@acme.example".to_owned()))
    );
}

#[test]
fn validate_org_input_requires_name() {
    assert_eq!(validate_org_input("", "ops@acme.example"), Err("Enter an organisation name."));
    assert_eq!(validate_org_input("   ", "ops@acme.example"), Err("Enter an organisation name."));
}

#[test]
fn validate_org_input_requires_plausible_email() {
    assert_eq!(validate_org_input("Acme", ""), Err("Enter a valid contact email."));
    assert_eq!(validate_org_input("Acme", "not-an-email"), Err("Enter a valid contact email."));
}
