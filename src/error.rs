use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error bodies are the plain-text literals the original API shipped with
/// (`BAD_REQUEST`, `AUTHENTICATION_ERROR`), kept for client compatibility.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty required input.
    BadRequest,
    /// Unknown email or wrong password. One opaque message for both, so
    /// responses never reveal which accounts exist.
    Authentication,
    /// Duplicate registration. The API reports this as 202, not 409; clients
    /// depend on that status.
    AlreadyRegistered,
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest => write!(f, "Bad Request"),
            AppError::Authentication => write!(f, "Authentication Error"),
            AppError::AlreadyRegistered => write!(f, "Already Registered"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string()),
            AppError::Authentication => {
                (StatusCode::UNAUTHORIZED, "AUTHENTICATION_ERROR".to_string())
            }
            AppError::AlreadyRegistered => (
                StatusCode::ACCEPTED,
                "User already exists. Please Log in.".to_string(),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
