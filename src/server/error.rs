use crate::utils::error::{AdvisorError, ErrorCategory};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.category() {
            ErrorCategory::Client => tracing::warn!("⚠️ Rejected request: {}", self),
            _ => tracing::error!(
                "❌ Request failed: {} (Category: {:?}) 💡 {}",
                self,
                self.category(),
                self.recovery_suggestion()
            ),
        }

        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}
