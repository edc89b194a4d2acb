use thiserror::Error;

/// Errors produced by the query layer.
///
/// `InvalidFilterValue` is a client-input error and is raised before any
/// store access; everything reaching the store after validation either
/// succeeds, resolves to an empty set, or fails as infrastructure.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid filter value: {0}")]
    InvalidFilterValue(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("export failed: {0}")]
    Export(String),
}
