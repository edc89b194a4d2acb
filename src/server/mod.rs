pub mod app;
pub mod handlers;

use anyhow::Result;
use tracing::info;

use crate::database::connection::*;

pub async fn start_server(port: u16, database_path: &str, cors_origin: Option<&str>) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    // Run migrations
    setup_database(&db).await?;
    info!("Database migrations completed");

    let app = app::create_app(db, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                        - Health check");
    info!("  /api/v1/node                   - Nodes (heavy_genes, mlmodel, name filters)");
    info!("  /api/v1/edge                   - Edges (genes, mlmodel filters, weight ordering)");
    info!("  /api/v1/activity               - Activities (mlmodel, sample, node filters)");
    info!("  /api/v1/participation          - Node/gene memberships (node, gene filters)");
    info!("  /api/v1/mlmodel                - Machine learning models");
    info!("  /api/v1/experiment             - Experiments (node filter)");
    info!("  /api/v1/sample                 - Samples (experiment, ids filters)");
    info!("  /api/v1/sample/get_annotations - Tab-delimited annotation export");
    info!("  /api/v1/search                 - Unified experiment/sample search");
}
