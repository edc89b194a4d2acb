use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::database::entities::experiments;
use crate::filters::{non_empty, parse_id_list, SampleFilter};
use crate::server::app::AppState;
use crate::services::{AnnotationService, SampleService, SampleView};

#[derive(Deserialize)]
pub struct SampleQueryParams {
    experiment: Option<String>,
    ids: Option<String>,
}

pub async fn list_samples(
    State(state): State<AppState>,
    Query(params): Query<SampleQueryParams>,
) -> Result<Json<Vec<SampleView>>, ApiError> {
    let filter = SampleFilter {
        experiment: non_empty(params.experiment.as_deref()).map(str::to_string),
        ids: non_empty(params.ids.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
    };

    let samples = SampleService::new(state.db.clone())
        .find_samples(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(samples))
}

pub async fn get_sample(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SampleView>, ApiError> {
    let sample = SampleService::new(state.db.clone())
        .find_sample(id)
        .await
        .map_err(api_error)?;

    Ok(Json(sample))
}

pub async fn get_sample_experiments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<experiments::Model>>, ApiError> {
    let experiments = SampleService::new(state.db.clone())
        .experiments_for_sample(id)
        .await
        .map_err(api_error)?;

    Ok(Json(experiments))
}

#[derive(Deserialize)]
pub struct AnnotationExportParams {
    annotation_types: Option<String>,
}

/// Serve the pivoted annotation table as a TSV attachment.
pub async fn get_annotations(
    State(state): State<AppState>,
    Query(params): Query<AnnotationExportParams>,
) -> Result<Response, ApiError> {
    let annotation_types = non_empty(params.annotation_types.as_deref())
        .map(|raw| raw.split(',').map(str::to_string).collect::<Vec<_>>());

    let tsv = AnnotationService::new(state.db.clone())
        .export_annotations(annotation_types)
        .await
        .map_err(api_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/tab-separated-values"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sample_annotations.tsv\"",
            ),
        ],
        tsv,
    )
        .into_response())
}
