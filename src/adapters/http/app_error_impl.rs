use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream detail stays in the logs; callers get a generic message.
        let code = self.code();
        match self {
            AppError::InvalidInput(msg) => {
                tracing::info!(error = %msg, "Rejected invalid input");
                error_resp(StatusCode::BAD_REQUEST, code, &msg)
            }
            AppError::Conflict => {
                tracing::info!("Rejected duplicate waitlist email");
                error_resp(StatusCode::CONFLICT, code, &AppError::Conflict.to_string())
            }
            AppError::MethodNotAllowed => {
                error_resp(StatusCode::METHOD_NOT_ALLOWED, code, "Method Not Allowed")
            }
            AppError::Upstream(detail) => {
                tracing::error!(error = %detail, "Request failed");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, "Internal error")
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "error": message });
    (status, Json(body)).into_response()
}
