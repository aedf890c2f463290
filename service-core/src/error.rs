use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    /// Storage failure. The message is returned to the caller, the source never is.
    #[error("Database error: {message}: {source}")]
    DatabaseError {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn database(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        AppError::DatabaseError {
            message: message.into(),
            source: source.into(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::database("database error", err)
    }
}

/// JSON body written for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::ValidationError(err) => {
                let mut fields: Vec<String> =
                    err.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort_unstable();
                (
                    StatusCode::BAD_REQUEST,
                    format!("missing or empty fields: {}", fields.join(", ")),
                    Some(err.to_string()),
                )
            }
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            AppError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string(), None),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
                None,
            ),
            AppError::DatabaseError { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
            AppError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration error".to_string(),
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                status: "error",
                message,
                details,
            }),
        )
            .into_response()
    }
}
