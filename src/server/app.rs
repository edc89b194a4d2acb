use anyhow::Result;
use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{
    activities, annotation_types, edges, experiments, health, ml_models, nodes, participations,
    samples, search,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState { db };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

/// Read-only query surface. All data is created by the out-of-band
/// import path, so everything here is GET.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Model-derived graph entities
        .route("/node", get(nodes::list_nodes))
        .route("/node/:id", get(nodes::get_node))
        .route("/edge", get(edges::list_edges))
        .route("/edge/:id", get(edges::get_edge))
        .route("/activity", get(activities::list_activities))
        .route("/participation", get(participations::list_participations))
        .route("/mlmodel", get(ml_models::list_ml_models))
        .route("/mlmodel/:id", get(ml_models::get_ml_model))
        // Experiments and samples
        .route("/experiment", get(experiments::list_experiments))
        .route("/experiment/:accession", get(experiments::get_experiment))
        .route("/sample", get(samples::list_samples))
        // Static segment before the :id route so it wins the match.
        .route("/sample/get_annotations", get(samples::get_annotations))
        .route("/sample/:id", get(samples::get_sample))
        .route(
            "/sample/:id/get_experiments",
            get(samples::get_sample_experiments),
        )
        .route(
            "/annotation_type",
            get(annotation_types::list_annotation_types),
        )
        // Cross-entity search
        .route("/search", get(search::search))
}
