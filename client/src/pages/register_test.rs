use super::*;

#[test]
fn validate_registration_accepts_reasonable_input() {
    assert_eq!(
        validate_registration(" somsak ", "longenough"),
        Ok(("somsak".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_registration_requires_username() {
    assert_eq!(validate_registration("  ", "longenough"), Err("Choose a username."));
}

#[test]
fn validate_registration_enforces_password_length() {
    assert_eq!(
        validate_registration("somsak", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_registration("somsak", "12345678").is_ok());
}
