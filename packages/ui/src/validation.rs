//! Field validation for the login, registration and entity forms.
//!
//! Every rule returns `None` when the value is acceptable and `Some(message)`
//! otherwise. Forms run the rule on each keystroke and once more on submit.
//!
//! Login and registration deliberately keep separate password policies:
//! registration enforces the full complexity rule, login only checks presence
//! and a length strictly greater than 8.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static LOGIN_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?\d{1,3})?[ -.]?\(?\d{1,4}\)?[ -.]?\d{1,4}[ -.]?\d{1,4}[ -.]?\d{1,9}$")
        .unwrap()
});

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%?&]{8,10}$").unwrap());

const PASSWORD_SYMBOLS: &str = "@$!%?&";

pub const EMAIL_MESSAGE: &str = "Invalid email format.";
pub const PHONE_MESSAGE: &str = "The phone number must be in a valid format, including optional international and area codes. Use dashes, periods, or spaces as separators.";
pub const PASSWORD_MESSAGE: &str = "Password must be between 8 and 10 characters long and include at least one special character, one uppercase letter, one lowercase letter, and one number.";

/// Registration email rule.
pub fn validate_email(email: &str) -> Option<&'static str> {
    (!EMAIL.is_match(email)).then_some(EMAIL_MESSAGE)
}

pub fn validate_phone(phone: &str) -> Option<&'static str> {
    (!PHONE.is_match(phone)).then_some(PHONE_MESSAGE)
}

/// Registration password rule: 8–10 characters from `[A-Za-z0-9@$!%?&]`
/// with at least one lowercase, uppercase, digit and symbol.
pub fn validate_password(password: &str) -> Option<&'static str> {
    let complete = PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    (!complete).then_some(PASSWORD_MESSAGE)
}

pub fn validate_login_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required.")
    } else if !LOGIN_EMAIL.is_match(email) {
        Some("Please enter a valid email address.")
    } else {
        None
    }
}

pub fn validate_login_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required.")
    } else if password.chars().count() <= 8 {
        Some("Password must be at least 8 characters.")
    } else {
        None
    }
}

/// Presence check used by the entity forms.
pub fn validate_required(label: &str, value: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{label} is required."))
}

/// First error of a set of field results, if any.
pub fn first_error<'a>(results: impl IntoIterator<Item = &'a Option<String>>) -> Option<&'a str> {
    results.into_iter().flatten().map(String::as_str).next()
}
