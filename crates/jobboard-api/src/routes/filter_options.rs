//! Filter option endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use jobboard_core::FilterOptions;
use jobboard_store::JobRepo;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_filter_options))
}

async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.job_repo.filter_options())
}
