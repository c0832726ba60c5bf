use sqlx::PgPool;
use tracing::info;

use crate::entries::repo_types::GuestbookEntry;

impl GuestbookEntry {
    /// All entries, newest first.
    pub async fn list(db: &PgPool) -> Result<Vec<GuestbookEntry>, sqlx::Error> {
        sqlx::query_as::<_, GuestbookEntry>(
            r#"
            SELECT id, name, text, created_at
            FROM entries
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn insert(db: &PgPool, name: &str, text: &str) -> Result<GuestbookEntry, sqlx::Error> {
        sqlx::query_as::<_, GuestbookEntry>(
            r#"
            INSERT INTO entries (name, text)
            VALUES ($1, $2)
            RETURNING id, name, text, created_at
            "#,
        )
        .bind(name)
        .bind(text)
        .fetch_one(db)
        .await
    }
}

/// Populate an empty guestbook with a few starter entries so a fresh
/// instance has something to show.
pub async fn seed_if_empty(db: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM entries")
        .fetch_one(db)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let starters: [(&str, &str); 4] = [
        ("H4xx0r", "first!!!"),
        ("Arni", "Hasta la vista, baby"),
        (
            "Duke Nukem",
            "It's time to kick ass and chew bubble gum. And I'm all out of gum.",
        ),
        (
            "Gump1337",
            "Mama always said life was like a box of chocolates. You never know what you're gonna get.",
        ),
    ];
    for (name, text) in starters {
        GuestbookEntry::insert(db, name, text).await?;
    }

    info!(count = starters.len(), "seeded guestbook entries");
    Ok(())
}
