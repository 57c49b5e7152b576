use super::*;

#[test]
fn validate_login_trims_username_and_keeps_password() {
    assert_eq!(
        validate_login("  ada ", " secret "),
        Ok(Credentials { username: "ada".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("ada", ""), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("   ", "   "), Err(MISSING_CREDENTIALS));
}
