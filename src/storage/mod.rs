//! Storage layer - student records backed by SQLite or an in-memory map.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewStudent, Student};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Operations every backing store provides. An absent id surfaces as
/// `Ok(None)`, distinct from a storage failure.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError>;

    /// Store a new record and return it with its assigned id.
    async fn insert(&self, new_student: NewStudent) -> Result<Student, StoreError>;

    /// Overwrite name/grade of an existing record, returning the updated
    /// record, or `None` if the id is absent.
    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError>;

    /// Remove a record permanently, returning it, or `None` if the id is
    /// absent.
    async fn delete(&self, id: i64) -> Result<Option<Student>, StoreError>;
}
