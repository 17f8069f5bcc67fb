use crate::api::models::AppState;
use crate::api::sort::handlers::sort_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/sort", get(sort_handler))
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::api::models::AppState;
    use crate::storage::{Gender, MemoryStore, StoredStudent, StudentMap};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn student(name: &str, height: f64, weight: f64) -> StoredStudent {
        StoredStudent {
            name: name.to_string(),
            age: 15,
            city: "New York".to_string(),
            gender: Gender::Female,
            height,
            weight,
        }
    }

    fn test_app(students: StudentMap) -> Router {
        api::router(AppState {
            store: Arc::new(MemoryStore::with_students(students)),
        })
    }

    async fn get_sorted(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn seed() -> StudentMap {
        let mut students = StudentMap::new();
        // bmi: S001 19.53, S002 26.78, S003 17.75
        students.insert("S001".to_string(), student("Alice Johnson", 1.6, 50.0));
        students.insert("S002".to_string(), student("Brian Lee", 1.75, 82.0));
        students.insert("S003".to_string(), student("Chloe Patel", 1.52, 41.0));
        students
    }

    #[tokio::test]
    async fn sort_by_bmi_desc_is_non_increasing() {
        let (status, body) = get_sorted(test_app(seed()), "/sort?sort_by=bmi&order_by=desc").await;

        assert_eq!(status, StatusCode::OK);
        let bmis: Vec<f64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["bmi"].as_f64().unwrap())
            .collect();
        assert_eq!(bmis, vec![26.78, 19.53, 17.75]);
    }

    #[tokio::test]
    async fn sort_by_height_asc() {
        let (status, body) = get_sorted(test_app(seed()), "/sort?sort_by=height&order_by=asc").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["S003", "S001", "S002"]);
    }

    #[tokio::test]
    async fn unknown_order_by_means_ascending() {
        let (status, body) =
            get_sorted(test_app(seed()), "/sort?sort_by=weight&order_by=sideways").await;

        assert_eq!(status, StatusCode::OK);
        let weights: Vec<f64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["weight"].as_f64().unwrap())
            .collect();
        assert_eq!(weights, vec![41.0, 50.0, 82.0]);
    }

    #[tokio::test]
    async fn invalid_sort_field_returns_404() {
        let (status, body) = get_sorted(test_app(seed()), "/sort?sort_by=age&order_by=asc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["detail"].as_str().unwrap(),
            "Invalid sort field, choose among height, weight and bmi"
        );
    }

    #[tokio::test]
    async fn record_missing_the_sort_field_sorts_as_zero() {
        let mut students = seed();
        // a hand-edited data file can omit height; it loads as 0
        students.insert("S000".to_string(), student("Zero Height", 0.0, 60.0));

        let (status, body) =
            get_sorted(test_app(students), "/sort?sort_by=height&order_by=asc").await;

        assert_eq!(status, StatusCode::OK);
        let first = &body.as_array().unwrap()[0];
        assert_eq!(first["id"].as_str().unwrap(), "S000");
        assert_eq!(first["bmi"].as_f64().unwrap(), 0.0);
    }
}
