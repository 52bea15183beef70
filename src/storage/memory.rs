//! In-memory storage implementation

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StoreError, StudentStore};
use crate::models::{NewStudent, Student};

/// Map-backed store for running without a database. Records are keyed by
/// id and live for the lifetime of the process; all access goes through a
/// single mutex, so concurrent inserts cannot hand out duplicate ids.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    students: HashMap<i64, Student>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                students: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let inner = self.inner.lock().await;
        let mut students: Vec<Student> = inner.students.values().cloned().collect();
        students.sort_by_key(|student| student.id);
        Ok(students)
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.students.get(&id).cloned())
    }

    async fn insert(&self, new_student: NewStudent) -> Result<Student, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let student = Student {
            id,
            name: new_student.name,
            grade: new_student.grade,
        };
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.students.get_mut(&id) {
            Some(student) => {
                student.name = changes.name;
                student.grade = changes.grade;
                Ok(Some(student.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let mut inner = self.inner.lock().await;
        Ok(inner.students.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn alice() -> NewStudent {
        NewStudent {
            name: "Alice".to_string(),
            grade: 100,
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = MemoryStore::new();

        let inserted = store.insert(alice()).await.unwrap();
        let fetched = store.get(inserted.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.grade, 100);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryStore::new();
        for grade in [100, 95, 90] {
            store
                .insert(NewStudent {
                    name: format!("student-{grade}"),
                    grade,
                })
                .await
                .unwrap();
        }

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let store = MemoryStore::new();
        let existing = store.insert(alice()).await.unwrap();

        assert!(store.update(existing.id + 1, alice()).await.unwrap().is_none());

        let unchanged = store.get(existing.id).await.unwrap().unwrap();
        assert_eq!(unchanged, existing);
    }

    #[tokio::test]
    async fn delete_then_get_returns_none() {
        let store = MemoryStore::new();
        let existing = store.insert(alice()).await.unwrap();

        let removed = store.delete(existing.id).await.unwrap().unwrap();
        assert_eq!(removed, existing);
        assert!(store.get(existing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_inserts_receive_distinct_ids() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for n in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(NewStudent {
                        name: format!("student-{n}"),
                        grade: n,
                    })
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()), "duplicate id handed out");
        }
        assert_eq!(ids.len(), 32);
    }
}
