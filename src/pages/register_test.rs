use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        username: " ada ".to_owned(),
        email: "ada@example.com ".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone_number: String::new(),
        citizenship_number: "A-1".to_owned(),
        password: "engine1".to_owned(),
        password_confirm: "engine1".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_registration() {
    let registration = validate_registration(&filled()).unwrap();
    assert_eq!(registration.username, "ada");
    assert_eq!(registration.email, "ada@example.com");
    assert_eq!(registration.password, "engine1");
    assert_eq!(registration.phone_number, "");
}

#[test]
fn checks_run_in_display_order() {
    let mut form = RegisterForm::default();
    assert_eq!(validate_registration(&form), Err("Username is required"));
    form.username = "ada".to_owned();
    assert_eq!(validate_registration(&form), Err("Email is required"));
    form.email = "ada@example.com".to_owned();
    assert_eq!(validate_registration(&form), Err("Password is required"));
    form.password = "12345".to_owned();
    assert_eq!(validate_registration(&form), Err("Password must be at least 6 characters"));
    form.password = "123456".to_owned();
    assert_eq!(validate_registration(&form), Err("Passwords do not match"));
    form.password_confirm = "123456".to_owned();
    assert!(validate_registration(&form).is_ok());
}

#[test]
fn password_length_counts_characters() {
    let mut form = filled();
    form.password = "pässwö".to_owned();
    form.password_confirm = form.password.clone();
    assert!(validate_registration(&form).is_ok());
}

#[test]
fn blank_username_is_rejected_even_with_spaces() {
    let mut form = filled();
    form.username = "   ".to_owned();
    assert_eq!(validate_registration(&form), Err("Username is required"));
}

#[test]
fn registration_reuses_credentials_for_login() {
    let credentials = validate_registration(&filled()).unwrap().credentials();
    assert_eq!(credentials.username, "ada");
    assert_eq!(credentials.password, "engine1");
}
