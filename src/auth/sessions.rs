use axum_extra::extract::cookie::{Cookie, SameSite};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::SessionConfig;

/// Server-side login session. The browser only ever holds the opaque
/// token; everything else stays in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: Uuid,
    pub user_id: i64,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub async fn create(db: &PgPool, user_id: i64, ttl_minutes: i64) -> Result<Session, sqlx::Error> {
        let expires_at = OffsetDateTime::now_utc() + time::Duration::minutes(ttl_minutes);
        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(db)
        .await
    }

    /// Look up a session that has not expired yet.
    pub async fn find_valid(db: &PgPool, token: Uuid) -> Result<Option<Session>, sqlx::Error> {
        sqlx::query_as::<_, Session>(
            r#"
            SELECT token, user_id, expires_at
            FROM sessions
            WHERE token = $1 AND expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, token: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(db)
            .await?;
        Ok(())
    }
}

pub fn session_cookie(config: &SessionConfig, token: Uuid) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie with the same name and path as the login cookie, for removal.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            cookie_name: "guestbook_session".into(),
            ttl_minutes: 60,
        }
    }

    #[test]
    fn session_cookie_is_http_only_and_scoped_to_root() {
        let token = Uuid::new_v4();
        let cookie = session_cookie(&test_config(), token);
        assert_eq!(cookie.name(), "guestbook_session");
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn removal_cookie_matches_name_and_path() {
        let config = test_config();
        let login = session_cookie(&config, Uuid::new_v4());
        let removal = removal_cookie(&config);
        assert_eq!(removal.name(), login.name());
        assert_eq!(removal.path(), login.path());
        assert!(removal.value().is_empty());
    }
}
