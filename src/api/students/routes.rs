use crate::api::models::AppState;
use crate::api::students::handlers::{
    create_student_handler, delete_student_handler, load_data_handler, student_by_id_handler,
    update_student_handler,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/load_data", get(load_data_handler))
        .route("/students/{student_id}", get(student_by_id_handler))
        .route("/create", post(create_student_handler))
        .route("/edit/{student_id}", put(update_student_handler))
        .route("/student/delete/{student_id}", delete(delete_student_handler))
}
