/*
 * Responsibility
 * - users store used by signup / login
 * - duplicate email -> RepoError::Conflict
 */
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn create(&self, email: &str, password_hash: &str) -> Result<UserRow, RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, RepoError>;
}

#[derive(Clone, Debug)]
pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepo for SqliteUserRepo {
    async fn create(&self, email: &str, password_hash: &str) -> Result<UserRow, RepoError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password)
            VALUES (?, ?)
            RETURNING id, email, password
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::from_sqlx(e, "user"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
