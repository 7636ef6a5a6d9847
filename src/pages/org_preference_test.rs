use super::*;

#[test]
fn member_from_email_fills_identity_from_local_part() {
    let member = member_from_email("Jo.Smith@Example.com", 0).unwrap();
    assert_eq!(member.id, "1");
    assert_eq!(member.username, "jo.smith");
    assert_eq!(member.full_name, "jo.smith");
    assert_eq!(member.email, "jo.smith@example.com");
    assert_eq!(member.avatar, None);
}

#[test]
fn member_ids_follow_list_position() {
    assert_eq!(member_from_email("a@b.com", 2).unwrap().id, "3");
}

#[test]
fn member_from_email_rejects_invalid_addresses() {
    assert!(member_from_email("", 0).is_none());
    assert!(member_from_email("no-at-sign", 0).is_none());
    assert!(member_from_email("@example.com", 0).is_none());
    assert!(member_from_email("user@", 0).is_none());
}
