/*
 * Responsibility
 * - events store: save / list / lookup
 * - EventRepo is the seam handlers depend on; SqliteEventRepo is the default backend
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i64,
}

/// An event that has not been stored yet (no id).
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i64,
}

#[async_trait]
pub trait EventRepo: Send + Sync {
    async fn save(&self, event: NewEvent) -> Result<EventRow, RepoError>;
    async fn get_all(&self) -> Result<Vec<EventRow>, RepoError>;
    async fn get(&self, event_id: i64) -> Result<Option<EventRow>, RepoError>;
}

#[derive(Clone, Debug)]
pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepo for SqliteEventRepo {
    async fn save(&self, event: NewEvent) -> Result<EventRow, RepoError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (name, description, location, date_time, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, location, date_time, user_id
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.date_time)
        .bind(event.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<EventRow>, RepoError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, event_id: i64) -> Result<Option<EventRow>, RepoError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
