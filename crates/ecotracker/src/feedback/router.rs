use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{FeedbackError, FeedbackSubmission};
use super::service::{FeedbackRepository, FeedbackService, FeedbackServiceError};
use crate::footprint::router::caller_id;
use crate::footprint::RepositoryError;

/// Optional display name forwarded alongside the caller id.
pub const USER_NAME_HEADER: &str = "x-user-name";

pub fn feedback_router<R>(service: Arc<FeedbackService<R>>) -> Router
where
    R: FeedbackRepository + 'static,
{
    Router::new()
        .route("/api/v1/feedback", post(submit_handler::<R>))
        .route("/api/v1/feedback/summary", get(summary_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<FeedbackService<R>>>,
    headers: HeaderMap,
    Json(submission): Json<FeedbackSubmission>,
) -> Response
where
    R: FeedbackRepository + 'static,
{
    let user_name = headers
        .get(USER_NAME_HEADER)
        .and_then(|value| value.to_str().ok());

    match service.submit(caller_id(&headers), user_name, submission) {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(FeedbackServiceError::Invalid(FeedbackError::MissingOwner)) => {
            let payload = json!({ "error": FeedbackError::MissingOwner.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(FeedbackServiceError::Invalid(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(FeedbackServiceError::Repository(error)) => repository_error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(State(service): State<Arc<FeedbackService<R>>>) -> Response
where
    R: FeedbackRepository + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(FeedbackServiceError::Repository(error)) => repository_error_response(error),
        Err(FeedbackServiceError::Invalid(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

fn repository_error_response(error: RepositoryError) -> Response {
    let status = match error {
        RepositoryError::Conflict => StatusCode::CONFLICT,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
