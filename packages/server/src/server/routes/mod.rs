// HTTP routes
pub mod articles;
pub mod health;
pub mod records;

pub use articles::*;
pub use health::*;
pub use records::*;

use api_core::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Route-level error wrapper mapping the upstream taxonomy onto HTTP
/// statuses: "nothing there" is 404, "the upstream misbehaved" is a
/// 502 from this aggregation layer.
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApiError::NotFound { .. } | ApiError::PageNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedResponse { .. }
            | ApiError::RequestFailed { .. }
            | ApiError::Http(_)
            | ApiError::UnrecognizedType { .. } => StatusCode::BAD_GATEWAY,
        };
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self.0, "Upstream failure");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
