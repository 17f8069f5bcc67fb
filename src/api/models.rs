use crate::bmi::{bmi, Verdict};
use crate::storage::{Gender, StoreError, StoredStudent, StudentStore};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

const MAX_NAME_CHARS: usize = 50;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

/// Gender as accepted on update payloads.
///
/// Deliberately wider than the stored [`Gender`] enum: `Others` parses
/// here but is rejected when the merged record is re-validated, matching
/// the create-time enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UpdateGender {
    Male,
    Female,
    Others,
}

/// Request to create a new student record
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

/// Partial update for an existing student record. Absent fields leave
/// the stored values untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
    pub gender: Option<UpdateGender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// A single student in a response, with freshly computed health fields
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub verdict: Verdict,
}

/// Confirmation message for mutating endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_students: usize,
}

/// One violated constraint on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error body for not-found responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Error body for validation failures
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub detail: Vec<FieldError>,
}

impl StudentResponse {
    /// Assemble a response record from a stored record and its key,
    /// recomputing bmi and verdict. Derived fields are never persisted.
    pub fn from_stored(id: &str, record: &StoredStudent) -> Self {
        let bmi_value = bmi(record.height, record.weight);
        Self {
            id: id.to_string(),
            name: record.name.clone(),
            age: record.age,
            city: record.city.clone(),
            gender: record.gender,
            height: record.height,
            weight: record.weight,
            bmi: bmi_value,
            verdict: Verdict::from_bmi(bmi_value),
        }
    }
}

/// Constraints every full record has to satisfy, whether it arrives
/// via create or as the result of a merge update.
fn record_field_errors(name: &str, age: u32, height: f64, weight: f64) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.chars().count() > MAX_NAME_CHARS {
        errors.push(FieldError::new("name", "must be at most 50 characters"));
    }
    if age == 0 || age >= 20 {
        errors.push(FieldError::new("age", "must be between 1 and 19"));
    }
    if height <= 0.0 {
        errors.push(FieldError::new("height", "must be greater than 0"));
    }
    if weight <= 0.0 {
        errors.push(FieldError::new("weight", "must be greater than 0"));
    }
    errors
}

impl CreateStudentRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "must not be empty"));
        }
        errors.extend(record_field_errors(
            &self.name,
            self.age,
            self.height,
            self.weight,
        ));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Split the request into its map key and stored value.
    pub fn into_parts(self) -> (String, StoredStudent) {
        let record = StoredStudent {
            name: self.name,
            age: self.age,
            city: self.city,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
        };
        (self.id, record)
    }
}

impl UpdateStudentRequest {
    /// Validate the supplied fields only
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.chars().count() > MAX_NAME_CHARS {
                errors.push(FieldError::new("name", "must be at most 50 characters"));
            }
        }
        if let Some(age) = self.age {
            if age == 0 || age >= 20 {
                errors.push(FieldError::new("age", "must be between 1 and 19"));
            }
        }
        if let Some(height) = self.height {
            if height <= 0.0 {
                errors.push(FieldError::new("height", "must be greater than 0"));
            }
        }
        if let Some(weight) = self.weight {
            if weight <= 0.0 {
                errors.push(FieldError::new("weight", "must be greater than 0"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Overlay the supplied fields on an existing record, then
    /// re-validate the merged result against the full record rules.
    pub fn merge_into(&self, existing: &StoredStudent) -> Result<StoredStudent, Vec<FieldError>> {
        let mut merged = existing.clone();
        let mut errors = Vec::new();

        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(age) = self.age {
            merged.age = age;
        }
        if let Some(city) = &self.city {
            merged.city = city.clone();
        }
        match self.gender {
            Some(UpdateGender::Male) => merged.gender = Gender::Male,
            Some(UpdateGender::Female) => merged.gender = Gender::Female,
            Some(UpdateGender::Others) => {
                errors.push(FieldError::new(
                    "gender",
                    "value 'Others' cannot be stored on a student record",
                ));
            }
            None => {}
        }
        if let Some(height) = self.height {
            merged.height = height;
        }
        if let Some(weight) = self.weight {
            merged.weight = weight;
        }

        errors.extend(record_field_errors(
            &merged.name,
            merged.age,
            merged.height,
            merged.weight,
        ));

        if errors.is_empty() {
            Ok(merged)
        } else {
            Err(errors)
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorDetail { detail })).into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationDetail { detail: errors }),
            )
                .into_response(),
            AppError::Store(err) => {
                error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDetail {
                        detail: "internal storage error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
