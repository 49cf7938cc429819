use super::*;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  somsak  ", "hunter2"),
        Ok(("somsak".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("somsak", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    assert_eq!(
        validate_credentials("somsak", " spaced "),
        Ok(("somsak".to_owned(), " spaced ".to_owned()))
    );
}
