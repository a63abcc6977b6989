pub mod db;
pub mod error;
pub mod event_repo;
pub mod user_repo;

pub use event_repo::{EventRepo, EventRow, NewEvent, SqliteEventRepo};
pub use user_repo::{SqliteUserRepo, UserRepo, UserRow};
