use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bodega::{QueryError, SetupError};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Where every error response points the caller back to.
pub const MENU_PATH: &str = "/menu";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Debes ingresar un código o una descripción")]
    InvalidQuery(#[from] QueryError),

    #[error("Opción no válida")]
    InvalidOption(String),

    /// A well-formed query that matched nothing; carries the user-facing message.
    #[error("{0}")]
    NoResults(String),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub volver: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_)
            | ServerError::InvalidQuery(_)
            | ServerError::InvalidOption(_) => StatusCode::BAD_REQUEST,
            ServerError::NoResults(_) | ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Setup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::InvalidQuery(_) => "INVALID_QUERY",
            ServerError::InvalidOption(_) => "INVALID_OPTION",
            ServerError::NoResults(_) => "NOT_FOUND",
            ServerError::Setup(_) => "SETUP_ERROR",
            ServerError::NotFound => "ROUTE_NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %error_code, error = %message, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: error_code,
                message,
            },
            volver: MENU_PATH.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
