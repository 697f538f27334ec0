//! PostgreSQL message store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the board when `DATABASE_URL` is set. The `messages` table is created
//! by the migrations under `src/db/migrations`.
//!
//! DESIGN
//! ======
//! Pages use keyset pagination on `(created_at, id)`, matching `Cursor`.
//! Votes use `UPDATE ... SET likes = likes + 1 RETURNING ...` so concurrent
//! voters never overwrite each other.

use sqlx::{PgPool, QueryBuilder};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Counter, Direction, Message, MessagePatch, MessageStore, NewMessage, Page, PageQuery, StoreError};

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;

type MessageRow = (Uuid, String, OffsetDateTime, i64, i64);

const SELECT_COLUMNS: &str = "SELECT id, text, created_at, likes, dislikes FROM messages";

#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_message((id, text, created_at, likes, dislikes): MessageRow) -> Message {
    Message {
        id,
        text,
        created_at,
        likes: u64::try_from(likes).unwrap_or_default(),
        dislikes: u64::try_from(dislikes).unwrap_or_default(),
    }
}

fn to_db_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Build the keyset page query for `query`.
pub(crate) fn page_query(query: PageQuery) -> QueryBuilder<'static, sqlx::Postgres> {
    let mut builder = QueryBuilder::new(SELECT_COLUMNS);
    let (cmp, order) = match query.direction {
        Direction::Ascending => (">", "ASC"),
        Direction::Descending => ("<", "DESC"),
    };

    if let Some(cursor) = query.after {
        let (created_at, id) = cursor.key();
        builder.push(format!(" WHERE (created_at, id) {cmp} ("));
        builder.push_bind(created_at);
        builder.push(", ");
        builder.push_bind(id);
        builder.push(")");
    }

    builder.push(format!(" ORDER BY created_at {order}, id {order} LIMIT "));
    builder.push_bind(i64::try_from(query.limit).unwrap_or(i64::MAX));
    builder
}

fn counter_column(counter: Counter) -> &'static str {
    match counter {
        Counter::Likes => "likes",
        Counter::Dislikes => "dislikes",
    }
}

#[async_trait::async_trait]
impl MessageStore for PgMessageStore {
    async fn create(&self, message: NewMessage) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO messages (id, text, created_at, likes, dislikes) VALUES ($1, $2, $3, $4, $5)")
            .bind(id)
            .bind(&message.text)
            .bind(message.created_at)
            .bind(to_db_count(message.likes))
            .bind(to_db_count(message.dislikes))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn query_page(&self, query: PageQuery) -> Result<Page, StoreError> {
        let rows = page_query(query)
            .build_query_as::<MessageRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(Page::new(rows.into_iter().map(to_message).collect()))
    }

    async fn read_one(&self, id: Uuid) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query_as::<_, MessageRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_message))
    }

    async fn update_fields(&self, id: Uuid, patch: MessagePatch) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE messages
             SET likes = COALESCE($2, likes),
                 dislikes = COALESCE($3, dislikes)
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.likes.map(to_db_count))
        .bind(patch.dislikes.map(to_db_count))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn increment(&self, id: Uuid, counter: Counter) -> Result<Option<Message>, StoreError> {
        let column = counter_column(counter);
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "UPDATE messages SET {column} = {column} + 1 WHERE id = $1
             RETURNING id, text, created_at, likes, dislikes"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(to_message))
    }
}
