use crate::api::models::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;
use tracing::info;

/// Return the full collection, keyed by id, with derived fields computed
pub async fn load_data_handler(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, StudentResponse>>, AppError> {
    let students = state.store.load()?;

    let records: BTreeMap<String, StudentResponse> = students
        .iter()
        .map(|(id, record)| (id.clone(), StudentResponse::from_stored(id, record)))
        .collect();

    Ok(Json(records))
}

/// Return a single student record by id
pub async fn student_by_id_handler(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let students = state.store.load()?;

    let record = students
        .get(&student_id)
        .ok_or_else(|| AppError::NotFound("Student id not present".to_string()))?;

    Ok(Json(StudentResponse::from_stored(&student_id, record)))
}

/// Create a new student record
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    // Validate
    request.validate().map_err(AppError::Validation)?;

    info!(student_id = %request.id, "Creating student record");

    let mut students = state.store.load()?;
    if students.contains_key(&request.id) {
        return Err(AppError::NotFound("Student data already present".to_string()));
    }

    // Persist; the id lives in the map key only
    let (id, record) = request.into_parts();
    students.insert(id, record);
    state.store.save(&students)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "New student data created".to_string(),
        }),
    ))
}

/// Merge-update an existing student record
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    // Validate the supplied fields before touching the store
    request.validate().map_err(AppError::Validation)?;

    info!(student_id = %student_id, "Updating student record");

    let mut students = state.store.load()?;
    let existing = students
        .get(&student_id)
        .ok_or_else(|| AppError::NotFound("Student id not present".to_string()))?;

    // Overlay supplied fields, then re-validate the merged record
    let merged = request
        .merge_into(existing)
        .map_err(AppError::Validation)?;

    students.insert(student_id, merged);
    state.store.save(&students)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Student data updated".to_string(),
        }),
    ))
}

/// Delete a student record by id
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    info!(student_id = %student_id, "Deleting student record");

    let mut students = state.store.load()?;
    if students.remove(&student_id).is_none() {
        return Err(AppError::NotFound("Invalid student id".to_string()));
    }

    state.store.save(&students)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Student data deleted".to_string(),
        }),
    ))
}
