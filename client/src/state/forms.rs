//! Validation for the placeholder login, register and contact forms.
//!
//! Valid submissions are only logged; nothing leaves the browser.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in every field.")]
    MissingField,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn required(raw: &str) -> Result<String, FormError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FormError::MissingField);
    }
    Ok(value.to_owned())
}

/// Loose shape check: one `@` with text on both sides and a dot in the domain.
fn email(raw: &str) -> Result<String, FormError> {
    let value = required(raw)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.contains('@') && domain.contains('.'));
    if !valid || value.contains(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    Ok(value)
}

pub fn validate_login(email_raw: &str, password: &str) -> Result<LoginForm, FormError> {
    if email_raw.trim().is_empty() || password.is_empty() {
        return Err(FormError::MissingField);
    }
    Ok(LoginForm { email: email(email_raw)?, password: password.to_owned() })
}

pub fn validate_register(name: &str, email_raw: &str, password: &str, confirm: &str) -> Result<RegisterForm, FormError> {
    if [name, email_raw, password, confirm].iter().any(|v| v.trim().is_empty()) {
        return Err(FormError::MissingField);
    }
    let email = email(email_raw)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(RegisterForm { name: name.trim().to_owned(), email, password: password.to_owned() })
}

pub fn validate_contact(name: &str, email_raw: &str, message: &str) -> Result<ContactForm, FormError> {
    if [name, email_raw, message].iter().any(|v| v.trim().is_empty()) {
        return Err(FormError::MissingField);
    }
    let email = email(email_raw)?;
    let message = message.trim();
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(FormError::MessageTooShort);
    }
    Ok(ContactForm { name: name.trim().to_owned(), email, message: message.to_owned() })
}
