use crate::api::models::*;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

/// Query parameters for the sort endpoint
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub sort_by: String,
    pub order_by: String,
}

#[derive(Debug, Clone, Copy)]
enum SortField {
    Height,
    Weight,
    Bmi,
}

fn sort_key(record: &StudentResponse, field: SortField) -> f64 {
    match field {
        SortField::Height => record.height,
        SortField::Weight => record.weight,
        SortField::Bmi => record.bmi,
    }
}

/// Return all records ordered by height, weight or bmi.
///
/// A field a record lacks sorts as 0; any `order_by` other than `desc`
/// means ascending.
pub async fn sort_handler(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let field = match query.sort_by.as_str() {
        "height" => SortField::Height,
        "weight" => SortField::Weight,
        "bmi" => SortField::Bmi,
        _ => {
            return Err(AppError::NotFound(
                "Invalid sort field, choose among height, weight and bmi".to_string(),
            ))
        }
    };
    let descending = query.order_by == "desc";

    info!(sort_by = %query.sort_by, order_by = %query.order_by, "Sorting student records");

    let students = state.store.load()?;
    let mut records: Vec<StudentResponse> = students
        .iter()
        .map(|(id, record)| StudentResponse::from_stored(id, record))
        .collect();

    records.sort_by(|a, b| {
        let (ka, kb) = (sort_key(a, field), sort_key(b, field));
        if descending {
            kb.total_cmp(&ka)
        } else {
            ka.total_cmp(&kb)
        }
    });

    Ok(Json(records))
}
