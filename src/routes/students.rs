use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::models::{NewStudent, Student};
use crate::storage::StudentStore;

// GET /students - list all students
pub async fn list_students(
    State(store): State<Arc<dyn StudentStore>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = store.list().await?;

    Ok(Json(students))
}

// GET /students/{id} - get student by ID
pub async fn get_student(
    State(store): State<Arc<dyn StudentStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let student = store.get(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(student))
}

// POST /students - create a student from a JSON body
pub async fn create_student(
    State(store): State<Arc<dyn StudentStore>>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let Json(new_student) = payload?;

    let student = store.insert(new_student).await?;
    tracing::info!(id = student.id, "created student");

    Ok((StatusCode::CREATED, Json(student)))
}

// PUT /students/{id} - overwrite a student's name and grade
pub async fn update_student(
    State(store): State<Arc<dyn StudentStore>>,
    Path(id): Path<i64>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(changes) = payload?;

    let student = store.update(id, changes).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(student))
}

// DELETE /students/{id} - delete a student, responding with the removed record
pub async fn delete_student(
    State(store): State<Arc<dyn StudentStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let student = store.delete(id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(id, "deleted student");

    Ok(Json(student))
}
