use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use ra_data::DataError;
use ra_logic::LogicError;

/// Errors returned by the HTTP handlers.
#[derive(Debug)]
pub enum WebError {
    /// No logic is registered for the requested entity.
    UnknownEntity(String),
    NotFound(String),
    /// The request carried invalid or incomplete parameters.
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::UnknownEntity(name) => (StatusCode::NOT_FOUND, format!("Unknown entity: {name}")),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<LogicError> for WebError {
    fn from(err: LogicError) -> Self {
        if let LogicError::Persistence(DataError::NotFound(msg)) = err {
            return WebError::NotFound(msg);
        }
        if err.is_client_error() {
            WebError::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, "request failed");
            WebError::Internal(err.to_string())
        }
    }
}
