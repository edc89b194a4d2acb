//! Unified search tests
//!
//! The aggregator merges experiment and sample hits into one shape and
//! cross-references each hit with its related entities.

use std::sync::Arc;

use adage::database::entities::*;
use adage::database::setup_database;
use adage::search::simple::SimpleSearchBackend;
use adage::services::SearchService;
use anyhow::Result;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use tempfile::NamedTempFile;

async fn setup_fixture() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    experiments::ActiveModel {
        accession: Set("E-GEOD-100".to_string()),
        name: Set("Heat stress study".to_string()),
        description: Set(Some("Heat shock response in leaf tissue".to_string())),
    }
    .insert(&db)
    .await?;

    samples::ActiveModel {
        id: Set(1),
        name: Set("Leaf_R1".to_string()),
        ml_data_source: Set(Some("Leaf_R1.CEL".to_string())),
    }
    .insert(&db)
    .await?;

    experiment_samples::ActiveModel {
        experiment_accession: Set("E-GEOD-100".to_string()),
        sample_id: Set(1),
    }
    .insert(&db)
    .await?;

    Ok((db, temp_file))
}

fn search_service(db: &DatabaseConnection) -> SearchService {
    let backend = Arc::new(SimpleSearchBackend::new(db.clone()));
    SearchService::new(db.clone(), backend)
}

#[tokio::test]
async fn experiment_hit_carries_its_sample_keys() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let results = search_service(&db).search("heat").await?;

    assert_eq!(results.len(), 1);
    let hit = &results[0];
    assert_eq!(hit.item_type, "experiment");
    assert_eq!(hit.pk, "E-GEOD-100");
    assert_eq!(hit.description, "Heat stress study");
    assert!(hit.related_items.contains(&"1".to_string()));

    Ok(())
}

#[tokio::test]
async fn sample_hit_carries_its_experiment_keys() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let results = search_service(&db).search("leaf").await?;

    // "leaf" matches the experiment description and the sample name
    assert_eq!(results.len(), 2);

    let sample_hit = results
        .iter()
        .find(|r| r.item_type == "sample")
        .expect("sample hit expected");
    assert_eq!(sample_hit.pk, "1");
    assert_eq!(sample_hit.description, "Leaf_R1");
    assert!(sample_hit
        .related_items
        .contains(&"E-GEOD-100".to_string()));

    Ok(())
}

#[tokio::test]
async fn snippet_joins_highlighted_fragments() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let results = search_service(&db).search("heat").await?;

    // Name and description both match, joined by the " ..." separator
    assert_eq!(
        results[0].snippet,
        "<em>Heat</em> stress study ...<em>Heat</em> shock response in leaf tissue"
    );

    Ok(())
}

#[tokio::test]
async fn blank_query_returns_nothing() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let results = search_service(&db).search("   ").await?;
    assert!(results.is_empty());

    Ok(())
}

#[tokio::test]
async fn unmatched_query_returns_nothing() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let results = search_service(&db).search("drought").await?;
    assert!(results.is_empty());

    Ok(())
}
