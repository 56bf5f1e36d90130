use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        name: " Maria Souza ".to_owned(),
        username: "maria".to_owned(),
        email: "maria@email.com".to_owned(),
        password: "hunter2".to_owned(),
        confirm_password: "hunter2".to_owned(),
    }
}

#[test]
fn plausible_email_shapes() {
    assert!(is_plausible_email("maria@email.com"));
    assert!(is_plausible_email("a.b+c@sub.example.org"));
}

#[test]
fn implausible_email_shapes() {
    for email in ["maria", "@email.com", "maria@", "maria@email", "maria@@email.com", "ma ria@email.com", "maria@email."] {
        assert!(!is_plausible_email(email), "{email}");
    }
}

#[test]
fn validate_registration_trims_text_fields() {
    let request = validate_registration(&filled()).unwrap();
    assert_eq!(request.name, "Maria Souza");
    assert_eq!(request.username, "maria");
    assert_eq!(request.email, "maria@email.com");
    assert_eq!(request.password, "hunter2");
}

#[test]
fn validate_registration_requires_every_field() {
    let form = RegistrationForm { username: "  ".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err(MISSING_FIELDS));
    let form = RegistrationForm { password: String::new(), confirm_password: String::new(), ..filled() };
    assert_eq!(validate_registration(&form), Err(MISSING_FIELDS));
}

#[test]
fn validate_registration_checks_email_format() {
    let form = RegistrationForm { email: "maria.email.com".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err(INVALID_EMAIL));
}

#[test]
fn validate_registration_requires_matching_passwords() {
    let form = RegistrationForm { confirm_password: "hunter3".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err(PASSWORD_MISMATCH));
}
