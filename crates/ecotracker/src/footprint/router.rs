use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::error::FootprintError;
use super::input::FootprintInput;
use super::level::FootprintLevel;
use super::repository::{FootprintRepository, RepositoryError};
use super::service::{FootprintService, FootprintServiceError};
use super::FootprintResult;

/// Header carrying the caller-asserted user id. Authentication happens upstream.
pub const OWNER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    #[serde(flatten)]
    pub result: FootprintResult,
    pub level: FootprintLevel,
    pub level_label: &'static str,
}

impl From<FootprintResult> for AssessmentView {
    fn from(result: FootprintResult) -> Self {
        let level = result.level();
        Self {
            result,
            level,
            level_label: level.label(),
        }
    }
}

/// Router builder exposing footprint submission, history and analytics endpoints.
pub fn footprint_router<R>(service: Arc<FootprintService<R>>) -> Router
where
    R: FootprintRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/footprints",
            post(submit_handler::<R>).get(history_handler::<R>),
        )
        .route("/api/v1/footprints/assess", post(assess_handler::<R>))
        .route("/api/v1/footprints/summary", get(overview_handler::<R>))
        .route("/api/v1/analytics/global", get(community_handler::<R>))
        .route("/api/v1/analytics/comparison", get(comparison_handler::<R>))
        .with_state(service)
}

pub(crate) fn caller_id(headers: &HeaderMap) -> &str {
    headers
        .get(OWNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
    Json(input): Json<FootprintInput>,
) -> Response
where
    R: FootprintRepository + 'static,
{
    let view = AssessmentView::from(service.assess(&input));
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
    headers: HeaderMap,
    Json(input): Json<FootprintInput>,
) -> Response
where
    R: FootprintRepository + 'static,
{
    match service.submit(caller_id(&headers), &input) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: FootprintRepository + 'static,
{
    match service.history(caller_id(&headers)) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn overview_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: FootprintRepository + 'static,
{
    match service.overview(caller_id(&headers)) {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn community_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
) -> Response
where
    R: FootprintRepository + 'static,
{
    match service.community() {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn comparison_handler<R>(
    State(service): State<Arc<FootprintService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: FootprintRepository + 'static,
{
    match service.comparison(caller_id(&headers)) {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: FootprintServiceError) -> Response {
    let status = match &error {
        FootprintServiceError::Footprint(FootprintError::MissingOwner) => StatusCode::BAD_REQUEST,
        FootprintServiceError::Footprint(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FootprintServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        FootprintServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
