//! Hand-rolled HTML rendering. The pages are small enough that a
//! templating engine would be more machinery than markup.

use crate::auth::dto::FieldErrors;
use crate::entries::repo_types::GuestbookEntry;

/// Escape text for interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    match errors.first_for(field) {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

fn layout(title: &str, current_user: Option<&str>, body: &str) -> String {
    let nav = match current_user {
        Some(username) => format!(
            concat!(
                r#"<span>Signed in as <strong>{}</strong></span> "#,
                r#"<form class="inline" method="post" action="/logout">"#,
                r#"<button type="submit">Log out</button></form>"#
            ),
            escape(username)
        ),
        None => r#"<a href="/login">Log in</a> <a href="/register">Register</a>"#.to_string(),
    };
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>{title} - Guestbook</title></head>"#,
            "<body>\n",
            r#"<nav><a href="/">Guestbook</a> | {nav}</nav>"#,
            "\n<main>\n<h1>{title}</h1>\n{body}\n</main>\n</body></html>"
        ),
        title = escape(title),
        nav = nav,
        body = body,
    )
}

pub fn register_page(username: &str, errors: &FieldErrors) -> String {
    let body = format!(
        concat!(
            r#"<form method="post" action="/register">"#,
            r#"<label>Username <input type="text" name="username" value="{username}"></label>{username_error}"#,
            r#"<label>Password <input type="password" name="password"></label>{password_error}"#,
            r#"<button type="submit">Register</button>"#,
            "</form>"
        ),
        username = escape(username),
        username_error = field_error(errors, "username"),
        password_error = field_error(errors, "password"),
    );
    layout("Register", None, &body)
}

pub fn login_page(username: &str, error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    };
    let body = format!(
        concat!(
            "{error_html}",
            r#"<form method="post" action="/login">"#,
            r#"<label>Username <input type="text" name="username" value="{username}"></label>"#,
            r#"<label>Password <input type="password" name="password"></label>"#,
            r#"<button type="submit">Log in</button>"#,
            "</form>"
        ),
        error_html = error_html,
        username = escape(username),
    );
    layout("Log in", None, &body)
}

pub fn entries_page(
    entries: &[GuestbookEntry],
    current_user: Option<&str>,
    name: &str,
    text: &str,
    errors: &FieldErrors,
) -> String {
    let mut items = String::new();
    for entry in entries {
        items.push_str(&format!(
            concat!(
                r#"<li><blockquote>{text}</blockquote>"#,
                r#"<p>&mdash; <strong>{name}</strong>, {date}</p></li>"#,
                "\n"
            ),
            text = escape(&entry.text),
            name = escape(&entry.name),
            date = entry.created_at.date(),
        ));
    }
    let body = format!(
        concat!(
            r#"<form method="post" action="/">"#,
            r#"<label>Name <input type="text" name="name" value="{name}"></label>{name_error}"#,
            r#"<label>Message <textarea name="text">{text}</textarea></label>{text_error}"#,
            r#"<button type="submit">Post</button>"#,
            "</form>\n<ul>\n{items}</ul>"
        ),
        name = escape(name),
        text = escape(text),
        name_error = field_error(errors, "name"),
        text_error = field_error(errors, "text"),
        items = items,
    );
    layout("Guestbook", current_user, &body)
}

pub fn error_page() -> String {
    layout(
        "Something went wrong",
        None,
        "<p>The request could not be completed. Please try again later.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn register_page_shows_field_errors_and_keeps_username() {
        let mut errors = FieldErrors::default();
        errors.push("username", "Username is already taken");
        let html = register_page("alice", &errors);
        assert!(html.contains("Username is already taken"));
        assert!(html.contains(r#"value="alice""#));
        // The password field never echoes a value back.
        assert!(!html.contains(r#"name="password" value="#));
    }

    #[test]
    fn login_page_shows_generic_error() {
        let html = login_page("alice", Some("Invalid username or password"));
        assert!(html.contains("Invalid username or password"));
    }

    #[test]
    fn entries_page_escapes_entry_content() {
        let entries = vec![GuestbookEntry {
            id: 1,
            name: "<b>H4xx0r</b>".into(),
            text: "first!!!".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }];
        let html = entries_page(&entries, Some("alice"), "", "", &FieldErrors::default());
        assert!(html.contains("&lt;b&gt;H4xx0r&lt;/b&gt;"));
        assert!(html.contains("first!!!"));
        assert!(html.contains("Signed in as"));
    }

    #[test]
    fn entries_page_offers_login_links_when_anonymous() {
        let html = entries_page(&[], None, "", "", &FieldErrors::default());
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/register""#));
    }
}
