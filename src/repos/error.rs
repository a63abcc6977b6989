/**
 * Responsibility
 * - what a repo reports upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("{0} conflict")]
    Conflict(&'static str),
}

impl RepoError {
    /// Unique-constraint violations become `Conflict(resource)`; anything else stays a db error.
    pub fn from_sqlx(e: sqlx::Error, resource: &'static str) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && dbe.is_unique_violation()
        {
            return RepoError::Conflict(resource);
        }
        RepoError::Db(e)
    }
}
