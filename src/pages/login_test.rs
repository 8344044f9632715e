use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ops  ", "s3cret"),
        Ok(("ops".to_owned(), "s3cret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("ops", " pass phrase "),
        Ok(("ops".to_owned(), " pass phrase ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "x"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("ops", ""), Err("Enter both username and password."));
}
