use axum::{extract::State, response::Json};

use super::{api_error, ApiError};
use crate::database::entities::annotation_types;
use crate::server::app::AppState;
use crate::services::AnnotationService;

pub async fn list_annotation_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<annotation_types::Model>>, ApiError> {
    let types = AnnotationService::new(state.db.clone())
        .list_annotation_types()
        .await
        .map_err(api_error)?;

    Ok(Json(types))
}
