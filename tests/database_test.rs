//! Database functionality tests
//!
//! Tests for schema migrations, entity operations, and the relation
//! invariants the query layer depends on.

use adage::database::entities::*;
use adage::database::setup_database;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set,
};
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    // Verify all tables exist by attempting to query them
    assert_eq!(genes::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(ml_models::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(nodes::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(participations::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(edges::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(experiments::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(samples::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(experiment_samples::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(activities::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(annotation_types::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(sample_annotations::Entity::find().all(&db).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_node_belongs_to_one_model() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let model = ml_models::ActiveModel {
        title: Set("Ensemble ADAGE 300".to_string()),
        organism_id: Set(208964),
        directed_g2g_edge: Set(false),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let node = nodes::ActiveModel {
        name: Set("Node 1".to_string()),
        mlmodel_id: Set(model.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let owner = node
        .find_related(ml_models::Entity)
        .one(&db)
        .await?
        .expect("node should have an owning model");
    assert_eq!(owner.id, model.id);
    assert_eq!(owner.title, "Ensemble ADAGE 300");

    Ok(())
}

#[tokio::test]
async fn test_experiment_sample_many_to_many() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let experiment = experiments::ActiveModel {
        accession: Set("E-GEOD-100".to_string()),
        name: Set("Heat stress study".to_string()),
        description: Set(None),
    }
    .insert(&db)
    .await?;

    let sample = samples::ActiveModel {
        name: Set("Leaf_R1".to_string()),
        ml_data_source: Set(Some("Leaf_R1.CEL".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    experiment_samples::ActiveModel {
        experiment_accession: Set(experiment.accession.clone()),
        sample_id: Set(sample.id),
    }
    .insert(&db)
    .await?;

    // Traverse both directions through the join table
    let members = experiment.find_related(samples::Entity).all(&db).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Leaf_R1");

    let owners = sample.find_related(experiments::Entity).all(&db).await?;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].accession, "E-GEOD-100");

    Ok(())
}

#[tokio::test]
async fn test_sample_annotation_uniqueness() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let sample = samples::ActiveModel {
        name: Set("Leaf_R1".to_string()),
        ml_data_source: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let tissue = annotation_types::ActiveModel {
        typename: Set("tissue".to_string()),
        description: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    sample_annotations::ActiveModel {
        sample_id: Set(sample.id),
        annotation_type_id: Set(tissue.id),
        text: Set("leaf".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    // A second value for the same (sample, type) pair must be rejected;
    // the pivot export depends on this constraint.
    let duplicate = sample_annotations::ActiveModel {
        sample_id: Set(sample.id),
        annotation_type_id: Set(tissue.id),
        text: Set("root".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(duplicate.is_err());

    let stored = sample_annotations::Entity::find()
        .filter(sample_annotations::Column::SampleId.eq(sample.id))
        .all(&db)
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "leaf");

    Ok(())
}
