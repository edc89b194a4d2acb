use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::database::entities::nodes;
use crate::filters::{non_empty, parse_id, parse_id_list, NodeFilter};
use crate::server::app::AppState;
use crate::services::NodeService;

#[derive(Deserialize)]
pub struct NodeQueryParams {
    heavy_genes: Option<String>,
    mlmodel: Option<String>,
    name: Option<String>,
    name__in: Option<String>,
}

pub async fn list_nodes(
    State(state): State<AppState>,
    Query(params): Query<NodeQueryParams>,
) -> Result<Json<Vec<nodes::Model>>, ApiError> {
    let filter = NodeFilter {
        heavy_genes: non_empty(params.heavy_genes.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        mlmodel: non_empty(params.mlmodel.as_deref())
            .map(parse_id)
            .transpose()
            .map_err(api_error)?,
        name: non_empty(params.name.as_deref()).map(str::to_string),
        name_in: non_empty(params.name__in.as_deref())
            .map(|raw| raw.split(',').map(str::to_string).collect()),
    };

    let nodes = NodeService::new(state.db.clone())
        .find_nodes(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(nodes))
}

pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<nodes::Model>, ApiError> {
    let node = NodeService::new(state.db.clone())
        .find_node(id)
        .await
        .map_err(api_error)?;

    Ok(Json(node))
}
