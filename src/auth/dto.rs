use serde::Deserialize;

/// Form body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Field-level validation errors, in the order they were recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for a field, if any.
    pub fn first_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_for_returns_earliest_message() {
        let mut errors = FieldErrors::default();
        errors.push("username", "too short");
        errors.push("username", "bad characters");
        errors.push("password", "must not be empty");

        assert_eq!(errors.first_for("username"), Some("too short"));
        assert_eq!(errors.first_for("password"), Some("must not be empty"));
        assert_eq!(errors.first_for("email"), None);
        assert!(!errors.is_empty());
    }
}
