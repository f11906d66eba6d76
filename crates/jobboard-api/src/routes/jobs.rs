//! Job listing endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use jobboard_core::{Error, JobQuery, JobRecord};
use jobboard_store::JobRepo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(save_jobs))
        .route("/{id}", get(get_job))
}

/// Raw listing parameters. Numbers arrive as text so that malformed values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListJobsQuery {
    page: Option<String>,
    limit: Option<String>,
    query: Option<String>,
    location: Option<String>,
    experience: Option<String>,
    source: Option<String>,
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobListResponse {
    jobs: Vec<JobRecord>,
    has_more: bool,
}

async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Json<JobListResponse> {
    let query = JobQuery {
        page: state.limits.clamp_page(parse_number(params.page.as_deref())),
        limit: state.limits.clamp_limit(parse_number(params.limit.as_deref())),
        text: params.query.unwrap_or_default(),
        location: params.location.unwrap_or_default(),
        experience: params.experience.unwrap_or_default(),
        source: params.source.unwrap_or_default(),
    };

    let page = state.job_repo.query(&query);
    let has_more = page.has_more(&query);

    Json(JobListResponse {
        jobs: page.records,
        has_more,
    })
}

async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRecord>, ApiError> {
    let job = state
        .job_repo
        .get_by_id(&id)
        .ok_or_else(|| Error::NotFound(format!("job {}", id)))?;
    Ok(Json(job))
}

#[derive(Debug, Serialize)]
struct SaveJobsResponse {
    count: usize,
}

async fn save_jobs(
    State(state): State<AppState>,
    Json(jobs): Json<Vec<JobRecord>>,
) -> Result<Json<SaveJobsResponse>, ApiError> {
    if let Some(idx) = jobs.iter().position(|job| job.id.as_str().is_empty()) {
        return Err(Error::InvalidInput(format!("job at index {} has an empty id", idx)).into());
    }

    let batch = jobs.len();
    let count = state.job_repo.upsert_batch(jobs);
    info!(batch, total = count, "Saved jobs");

    Ok(Json(SaveJobsResponse { count }))
}
