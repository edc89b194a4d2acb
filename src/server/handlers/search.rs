use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::search::simple::SimpleSearchBackend;
use crate::server::app::AppState;
use crate::services::{SearchResult, SearchService};

#[derive(Deserialize)]
pub struct SearchQueryParams {
    #[serde(default)]
    q: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let backend = Arc::new(SimpleSearchBackend::new(state.db.clone()));
    let results = SearchService::new(state.db.clone(), backend)
        .search(&params.q)
        .await
        .map_err(api_error)?;

    Ok(Json(results))
}
