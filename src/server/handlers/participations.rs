use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::database::entities::participations;
use crate::filters::{non_empty, parse_id_list, ParticipationFilter};
use crate::server::app::AppState;
use crate::services::ParticipationService;

#[derive(Deserialize)]
pub struct ParticipationQueryParams {
    node: Option<String>,
    gene: Option<String>,
}

pub async fn list_participations(
    State(state): State<AppState>,
    Query(params): Query<ParticipationQueryParams>,
) -> Result<Json<Vec<participations::Model>>, ApiError> {
    let filter = ParticipationFilter {
        nodes: non_empty(params.node.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        genes: non_empty(params.gene.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
    };

    let participations = ParticipationService::new(state.db.clone())
        .find_participations(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(participations))
}
