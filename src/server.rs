//! HTTP surface for the job board.

use crate::application::{ApplicationError, ApplicationInput, ContactKind};
use crate::board::{BoardView, JobBoard};
use crate::filter::FilterCriteria;
use crate::i18n::{ApplyFormStrings, Language, LanguageRegistry, MetricsReport};
use crate::store::{JobId, JobInputError, JobRecord, JobRecordInput};
use crate::translator::JobTranslator;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Job {0} not found")]
    JobNotFound(JobId),
    #[error(transparent)]
    InvalidJob(#[from] JobInputError),
    /// Carries the form language so the message can be localized
    #[error("{0}")]
    InvalidApplication(ApplicationError, Language),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::JobNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidJob(_) | ApiError::InvalidApplication(..) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        let message = match &self {
            ApiError::InvalidApplication(error, language) => error.localized(*language),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Job posting body; the language is parsed here so unknown names map to 400.
#[derive(Debug, Deserialize)]
struct PostJobRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    contact: String,
    native_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguageRequest {
    language: String,
}

fn parse_language(value: &str) -> Result<Language, ApiError> {
    Language::parse(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Build the JSON API router around a shared board.
pub fn build_router<T: JobTranslator + 'static>(board: JobBoard<T>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/jobs", get(list_jobs::<T>).post(post_job::<T>))
        .route("/api/jobs/:id/applications", post(apply::<T>))
        .route("/api/language", put(set_language::<T>))
        .route(
            "/api/filter",
            post(apply_filter::<T>).delete(clear_filter::<T>),
        )
        .route("/api/metrics", get(metrics::<T>))
        .layer(TraceLayer::new_for_http())
        .with_state(board)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "agri-job-board",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn languages() -> Json<serde_json::Value> {
    let languages: Vec<_> = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|lang| {
            json!({
                "code": lang.code,
                "name": lang.name,
                "native_name": lang.native_name,
            })
        })
        .collect();
    Json(json!(languages))
}

async fn list_jobs<T: JobTranslator + 'static>(State(board): State<JobBoard<T>>) -> Json<BoardView> {
    Json(board.view())
}

async fn post_job<T: JobTranslator + 'static>(
    State(board): State<JobBoard<T>>,
    Json(request): Json<PostJobRequest>,
) -> Result<(StatusCode, Json<JobRecord>), ApiError> {
    let native_language = match request.native_language.as_deref() {
        Some(value) => parse_language(value)?,
        None => Language::canonical(),
    };
    let input = JobRecordInput {
        title: request.title,
        location: request.location,
        description: request.description,
        contact: request.contact,
        native_language,
    };
    input.validate()?;

    let record = board.post_job(input);
    Ok((StatusCode::CREATED, Json(record)))
}

async fn set_language<T: JobTranslator + 'static>(
    State(board): State<JobBoard<T>>,
    Json(request): Json<LanguageRequest>,
) -> Result<Json<BoardView>, ApiError> {
    let language = parse_language(&request.language)?;
    board.set_display_language(language);
    Ok(Json(board.view()))
}

async fn apply_filter<T: JobTranslator + 'static>(
    State(board): State<JobBoard<T>>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<BoardView> {
    board.apply_filter(criteria);
    Json(board.view())
}

async fn clear_filter<T: JobTranslator + 'static>(
    State(board): State<JobBoard<T>>,
) -> Json<BoardView> {
    board.clear_filter();
    Json(board.view())
}

async fn apply<T: JobTranslator + 'static>(
    State(board): State<JobBoard<T>>,
    Path(id): Path<JobId>,
    Json(application): Json<ApplicationInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let job = board.job(id).ok_or(ApiError::JobNotFound(id))?;
    let language = match application.language.as_deref() {
        Some(value) => parse_language(value)?,
        None => Language::canonical(),
    };
    application
        .validate()
        .map_err(|error| ApiError::InvalidApplication(error, language))?;
    let strings = ApplyFormStrings::for_language(language);

    info!(
        job_id = job.id,
        applicant_email = %application.email,
        has_message = application.message.as_deref().is_some_and(|m| !m.trim().is_empty()),
        "Application submitted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "status": "submitted",
            "job_id": job.id,
            "contact": {
                "kind": ContactKind::of(&job.contact),
                "value": job.contact,
            },
            "confirmation": {
                "title": strings.application_submitted,
                "message": strings.thank_you_message,
            },
        })),
    ))
}

async fn metrics<T: JobTranslator + 'static>(State(board): State<JobBoard<T>>) -> Json<MetricsReport> {
    Json(board.metrics())
}
