use serde::{Serialize, Deserialize};

/// A stored student record. The id is assigned by the storage layer on
/// insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: i64,
}

/// Body of a create or update request: the mutable fields of a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub grade: i64,
}
