pub mod activities;
pub mod annotation_types;
pub mod edges;
pub mod experiments;
pub mod health;
pub mod ml_models;
pub mod nodes;
pub mod participations;
pub mod samples;
pub mod search;

use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::error;

use crate::errors::QueryError;

pub(crate) type ApiError = (StatusCode, Json<Value>);

/// Map the query-layer error taxonomy onto HTTP: bad filter input is the
/// client's problem, missing point lookups are 404, everything else is
/// infrastructure.
pub(crate) fn api_error(err: QueryError) -> ApiError {
    let status = match &err {
        QueryError::InvalidFilterValue(_) => StatusCode::BAD_REQUEST,
        QueryError::NotFound(_) => StatusCode::NOT_FOUND,
        QueryError::Db(_) | QueryError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("query failed: {}", err);
    }
    (status, Json(json!({ "error": err.to_string() })))
}
