use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::EntityTrait;

use crate::database::entities::{ml_models, ml_models::Entity as MlModels};
use crate::server::app::AppState;

pub async fn list_ml_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<ml_models::Model>>, StatusCode> {
    let models = MlModels::find()
        .all(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(models))
}

pub async fn get_ml_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ml_models::Model>, StatusCode> {
    let model = MlModels::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(model))
}
