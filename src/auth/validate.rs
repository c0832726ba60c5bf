use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::{FieldErrors, RegistrationForm};

pub const USERNAME_MIN: usize = 2;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 4;
pub const PASSWORD_MAX: usize = 128;

pub(crate) fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

/// Structural checks only. Duplicate usernames are the repository's
/// concern, not this function's.
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let username = form.username.trim();
    if username.is_empty() {
        errors.push("username", "Username must not be empty");
    } else if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        errors.push(
            "username",
            format!(
                "Username must be between {} and {} characters",
                USERNAME_MIN, USERNAME_MAX
            ),
        );
    } else if !is_valid_username(username) {
        errors.push(
            "username",
            "Username may only contain letters, digits, '_', '.' and '-'",
        );
    }

    if form.password.is_empty() {
        errors.push("password", "Password must not be empty");
    } else if form.password.len() < PASSWORD_MIN || form.password.len() > PASSWORD_MAX {
        errors.push(
            "password",
            format!(
                "Password must be between {} and {} characters",
                PASSWORD_MIN, PASSWORD_MAX
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_reasonable_credentials() {
        let errors = validate_registration(&form("alice", "Passw0rd!"));
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_empty_fields() {
        let errors = validate_registration(&form("", ""));
        assert_eq!(errors.first_for("username"), Some("Username must not be empty"));
        assert_eq!(errors.first_for("password"), Some("Password must not be empty"));
    }

    #[test]
    fn rejects_username_with_invalid_characters() {
        let errors = validate_registration(&form("al ice", "secret"));
        assert!(errors.first_for("username").unwrap().contains("letters"));
    }

    #[test]
    fn rejects_overlong_username() {
        let errors = validate_registration(&form(&"a".repeat(USERNAME_MAX + 1), "secret"));
        assert!(errors.first_for("username").unwrap().contains("between"));
    }

    #[test]
    fn trims_username_before_checking() {
        let errors = validate_registration(&form("  bob  ", "secret"));
        assert!(errors.is_empty());
    }
}
