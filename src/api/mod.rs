pub mod models;
pub mod sort;
pub mod students;

// Re-exports
pub use models::*;

use axum::{extract::State, routing::get, Json, Router};

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/about", get(about_handler))
        .route("/health", get(health_handler))
        .merge(students::routes())
        .merge(sort::routes())
        .with_state(state)
}

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This service manages student health records".to_string(),
    })
}

pub async fn about_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "The student dataset contains basic demographic and physical \
                  attributes of five students. It can be used for sorting, searching \
                  or updating student health records."
            .to_string(),
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let total_students = state.store.load().map(|s| s.len()).unwrap_or(0);
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_students,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState {
            store: Arc::new(MemoryStore::new()),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_returns_static_message() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("student"));
    }

    #[tokio::test]
    async fn about_returns_static_description() {
        let (status, body) = get_json("/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("dataset"));
    }

    #[tokio::test]
    async fn health_reports_record_count() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["total_students"], 0);
    }
}
