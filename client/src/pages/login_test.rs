use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  joao  ", "s3cret"),
        Ok(LoginRequest { username: "joao".to_owned(), password: "s3cret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("joao", " pass ").unwrap();
    assert_eq!(request.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "s3cret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("joao", ""), Err(MISSING_CREDENTIALS));
}
