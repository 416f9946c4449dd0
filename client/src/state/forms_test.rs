use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_trims_email() {
    assert_eq!(
        validate_login("  me@example.com ", "secret"),
        Ok(LoginForm { email: "me@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("   ", "secret"), Err(FormError::MissingField));
    assert_eq!(validate_login("me@example.com", ""), Err(FormError::MissingField));
}

#[test]
fn login_rejects_malformed_email() {
    for bad in ["plainaddress", "@example.com", "me@localhost", "a@b@c.com", "me @example.com"] {
        assert_eq!(validate_login(bad, "secret"), Err(FormError::InvalidEmail), "{bad}");
    }
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_accepts_valid_input() {
    let form = validate_register(" Sam ", "sam@example.com", "longenough", "longenough").unwrap();
    assert_eq!(form.name, "Sam");
    assert_eq!(form.email, "sam@example.com");
}

#[test]
fn register_rejects_short_password() {
    assert_eq!(
        validate_register("Sam", "sam@example.com", "short", "short"),
        Err(FormError::PasswordTooShort)
    );
}

#[test]
fn register_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register("Sam", "sam@example.com", "longenough", "longenougH"),
        Err(FormError::PasswordMismatch)
    );
}

#[test]
fn register_reports_missing_before_other_errors() {
    assert_eq!(validate_register("", "bad", "x", "y"), Err(FormError::MissingField));
}

// =============================================================
// Contact
// =============================================================

#[test]
fn contact_requires_minimum_message_length() {
    assert_eq!(validate_contact("Sam", "sam@example.com", "  too short "), Err(FormError::MessageTooShort));
}

#[test]
fn contact_trims_fields() {
    assert_eq!(
        validate_contact(" Sam ", "sam@example.com", " Hello, I have a question. "),
        Ok(ContactForm {
            name: "Sam".to_owned(),
            email: "sam@example.com".to_owned(),
            message: "Hello, I have a question.".to_owned(),
        })
    );
}

#[test]
fn form_errors_render_user_facing_text() {
    assert_eq!(FormError::MissingField.to_string(), "Please fill in every field.");
    assert_eq!(FormError::PasswordTooShort.to_string(), "Password must be at least 8 characters.");
    assert_eq!(FormError::MessageTooShort.to_string(), "Message must be at least 10 characters.");
}
