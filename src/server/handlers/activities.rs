use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::database::entities::activities;
use crate::filters::{non_empty, parse_id, parse_id_list, ActivityFilter};
use crate::server::app::AppState;
use crate::services::ActivityService;

#[derive(Deserialize)]
pub struct ActivityQueryParams {
    mlmodel: Option<String>,
    sample: Option<String>,
    node: Option<String>,
}

pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityQueryParams>,
) -> Result<Json<Vec<activities::Model>>, ApiError> {
    let filter = ActivityFilter {
        mlmodel: non_empty(params.mlmodel.as_deref())
            .map(parse_id)
            .transpose()
            .map_err(api_error)?,
        samples: non_empty(params.sample.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        nodes: non_empty(params.node.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
    };

    let activities = ActivityService::new(state.db.clone())
        .find_activities(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(activities))
}
