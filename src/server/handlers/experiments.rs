use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::filters::{non_empty, parse_id, ExperimentFilter};
use crate::server::app::AppState;
use crate::services::{ExperimentService, ExperimentView};

#[derive(Deserialize)]
pub struct ExperimentQueryParams {
    node: Option<String>,
}

pub async fn list_experiments(
    State(state): State<AppState>,
    Query(params): Query<ExperimentQueryParams>,
) -> Result<Json<Vec<ExperimentView>>, ApiError> {
    let filter = ExperimentFilter {
        node: non_empty(params.node.as_deref())
            .map(parse_id)
            .transpose()
            .map_err(api_error)?,
    };

    let experiments = ExperimentService::new(state.db.clone())
        .find_experiments(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(experiments))
}

pub async fn get_experiment(
    State(state): State<AppState>,
    Path(accession): Path<String>,
) -> Result<Json<ExperimentView>, ApiError> {
    let experiment = ExperimentService::new(state.db.clone())
        .find_experiment(&accession)
        .await
        .map_err(api_error)?;

    Ok(Json(experiment))
}
