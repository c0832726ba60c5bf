use sqlx::FromRow;
use time::OffsetDateTime;

/// A single guestbook entry.
#[derive(Debug, Clone, FromRow)]
pub struct GuestbookEntry {
    pub id: i64,
    pub name: String,
    pub text: String,
    pub created_at: OffsetDateTime,
}
