use serde::Deserialize;

use crate::auth::dto::FieldErrors;

pub const NAME_MAX: usize = 64;
pub const TEXT_MAX: usize = 2000;

/// Form body for posting a guestbook entry.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

pub fn validate_entry(form: &EntryForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push("name", "Name must not be empty");
    } else if name.len() > NAME_MAX {
        errors.push("name", format!("Name must be at most {} characters", NAME_MAX));
    }

    let text = form.text.trim();
    if text.is_empty() {
        errors.push("text", "Message must not be empty");
    } else if text.len() > TEXT_MAX {
        errors.push(
            "text",
            format!("Message must be at most {} characters", TEXT_MAX),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_normal_entry() {
        let form = EntryForm {
            name: "Arni".into(),
            text: "Hasta la vista, baby".into(),
        };
        assert!(validate_entry(&form).is_empty());
    }

    #[test]
    fn rejects_blank_fields() {
        let form = EntryForm {
            name: "   ".into(),
            text: String::new(),
        };
        let errors = validate_entry(&form);
        assert_eq!(errors.first_for("name"), Some("Name must not be empty"));
        assert_eq!(errors.first_for("text"), Some("Message must not be empty"));
    }

    #[test]
    fn rejects_oversized_message() {
        let form = EntryForm {
            name: "Duke".into(),
            text: "x".repeat(TEXT_MAX + 1),
        };
        let errors = validate_entry(&form);
        assert!(errors.first_for("text").unwrap().contains("at most"));
    }
}
