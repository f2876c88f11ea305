//! The health check endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

/// The body returned by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "OK" while the server is able to respond.
    pub status: String,
    /// A human readable description of the status.
    pub message: String,
}

/// Handle `GET /health`.
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_owned(),
        message: "API Running".to_owned(),
    })
}

#[cfg(test)]
mod health_tests {
    use axum::response::IntoResponse;
    use serde_json::{Value, json};

    use crate::test_utils::{assert_content_type, assert_status_ok, parse_json};

    use super::get_health;

    #[tokio::test]
    async fn reports_ok() {
        let response = get_health().await.into_response();

        assert_status_ok(&response);
        assert_content_type(&response, "application/json");
        let body: Value = parse_json(response).await;
        assert_eq!(body, json!({"status": "OK", "message": "API Running"}));
    }
}
