use crate::users::repo_types::User;
use sqlx::SqlitePool;
use time::OffsetDateTime;

impl User {
    /// Insert a new user; the store assigns the id.
    pub async fn create(db: &SqlitePool, username: &str, email: &str) -> Result<User, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Write every field of the record with the given id, inserting it when absent.
    /// `created_at` of an existing row is kept.
    pub async fn save(
        db: &SqlitePool,
        id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                email = excluded.email,
                updated_at = excluded.updated_at
            RETURNING id, username, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
    }

    /// Hard delete by primary key. Returns the number of rows removed.
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected())
    }
}
