use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use profilehub_core::aggregation::{aggregation_error_to_status_code, AggregationError};

/// Handler error that wraps `anyhow::Error`.
///
/// Aggregation errors keep their own status code; anything else is a 500.
/// The body is always `{"error": "<message>"}`.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(err) = self.0.downcast_ref::<AggregationError>() {
            let code = aggregation_error_to_status_code(err);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = %status_code, "Request rejected");
        }

        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status_code, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
