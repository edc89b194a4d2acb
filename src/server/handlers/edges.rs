use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::filters::{non_empty, parse_id, parse_id_list, EdgeFilter, EdgeOrdering};
use crate::server::app::AppState;
use crate::services::{EdgeService, EdgeView};

#[derive(Deserialize)]
pub struct EdgeQueryParams {
    genes: Option<String>,
    gene1: Option<String>,
    gene2: Option<String>,
    mlmodel: Option<String>,
    order_by: Option<String>,
}

pub async fn list_edges(
    State(state): State<AppState>,
    Query(params): Query<EdgeQueryParams>,
) -> Result<Json<Vec<EdgeView>>, ApiError> {
    let filter = EdgeFilter {
        genes: non_empty(params.genes.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        gene1: non_empty(params.gene1.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        gene2: non_empty(params.gene2.as_deref())
            .map(parse_id_list)
            .transpose()
            .map_err(api_error)?,
        mlmodel: non_empty(params.mlmodel.as_deref())
            .map(parse_id)
            .transpose()
            .map_err(api_error)?,
        order_by: non_empty(params.order_by.as_deref())
            .map(EdgeOrdering::parse)
            .transpose()
            .map_err(api_error)?,
    };

    let edges = EdgeService::new(state.db.clone())
        .find_edges(&filter)
        .await
        .map_err(api_error)?;

    Ok(Json(edges))
}

pub async fn get_edge(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EdgeView>, ApiError> {
    let edge = EdgeService::new(state.db.clone())
        .find_edge(id)
        .await
        .map_err(api_error)?;

    Ok(Json(edge))
}
