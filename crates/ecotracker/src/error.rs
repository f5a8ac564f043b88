use crate::config::ConfigError;
use crate::feedback::{FeedbackError, FeedbackServiceError};
use crate::footprint::{FootprintError, FootprintServiceError, RepositoryError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Footprint(FootprintError),
    Feedback(FeedbackError),
    Repository(RepositoryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Footprint(err) => write!(f, "footprint error: {}", err),
            AppError::Feedback(err) => write!(f, "feedback error: {}", err),
            AppError::Repository(err) => write!(f, "repository error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Footprint(err) => Some(err),
            AppError::Feedback(err) => Some(err),
            AppError::Repository(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Footprint(FootprintError::MissingOwner) => StatusCode::BAD_REQUEST,
            AppError::Footprint(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Feedback(FeedbackError::MissingOwner) => StatusCode::BAD_REQUEST,
            AppError::Feedback(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<FootprintError> for AppError {
    fn from(value: FootprintError) -> Self {
        Self::Footprint(value)
    }
}

impl From<FeedbackError> for AppError {
    fn from(value: FeedbackError) -> Self {
        Self::Feedback(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

impl From<FootprintServiceError> for AppError {
    fn from(value: FootprintServiceError) -> Self {
        match value {
            FootprintServiceError::Footprint(err) => Self::Footprint(err),
            FootprintServiceError::Repository(err) => Self::Repository(err),
        }
    }
}

impl From<FeedbackServiceError> for AppError {
    fn from(value: FeedbackServiceError) -> Self {
        match value {
            FeedbackServiceError::Invalid(err) => Self::Feedback(err),
            FeedbackServiceError::Repository(err) => Self::Repository(err),
        }
    }
}
