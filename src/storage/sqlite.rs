//! SQLite storage implementation

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::{StoreError, StudentStore};
use crate::models::{NewStudent, Student};

/// SQLite-backed store. Successful mutations are durable across restarts;
/// row-level consistency is delegated to the database engine.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database at `url` and ensure the students table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        Self::from_pool(SqlitePool::connect(url).await?).await
    }

    /// Open an in-memory database (for testing). Capped at one connection:
    /// every `:memory:` connection is a separate database.
    pub async fn connect_in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn initialize_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS students (
                   id INTEGER PRIMARY KEY AUTOINCREMENT,
                   name TEXT NOT NULL,
                   grade INTEGER NOT NULL
               )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>(
            r#"SELECT id, name, grade FROM students ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            r#"SELECT id, name, grade FROM students WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn insert(&self, new_student: NewStudent) -> Result<Student, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (name, grade) VALUES (?, ?) RETURNING id, name, grade"#,
        )
        .bind(&new_student.name)
        .bind(new_student.grade)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    // RETURNING makes the existence check and the mutation one statement:
    // no matching row means no returned row.
    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            r#"UPDATE students SET name = ?, grade = ? WHERE id = ? RETURNING id, name, grade"#,
        )
        .bind(&changes.name)
        .bind(changes.grade)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn delete(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            r#"DELETE FROM students WHERE id = ? RETURNING id, name, grade"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }
}
