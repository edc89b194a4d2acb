//! Annotation pivot export tests
//!
//! One row per (experiment, sample), one column per annotation type,
//! tab-delimited, with a fixed missing-value policy: absent values and
//! unknown column names yield empty cells, never errors.

use adage::database::entities::*;
use adage::database::setup_database;
use adage::services::AnnotationService;
use anyhow::Result;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};
use tempfile::NamedTempFile;

/// One experiment "E" with two samples: S1 annotated {"tissue": "liver"},
/// S2 unannotated. Only "tissue" exists in the vocabulary.
async fn setup_fixture() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    experiments::ActiveModel {
        accession: Set("E".to_string()),
        name: Set("Fixture experiment".to_string()),
        description: Set(None),
    }
    .insert(&db)
    .await?;

    samples::Entity::insert_many([
        samples::ActiveModel {
            id: Set(1),
            name: Set("S1".to_string()),
            ml_data_source: Set(None),
        },
        samples::ActiveModel {
            id: Set(2),
            name: Set("S2".to_string()),
            ml_data_source: Set(None),
        },
    ])
    .exec(&db)
    .await?;

    experiment_samples::Entity::insert_many([
        experiment_samples::ActiveModel {
            experiment_accession: Set("E".to_string()),
            sample_id: Set(1),
        },
        experiment_samples::ActiveModel {
            experiment_accession: Set("E".to_string()),
            sample_id: Set(2),
        },
    ])
    .exec(&db)
    .await?;

    let tissue = annotation_types::ActiveModel {
        typename: Set("tissue".to_string()),
        description: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    sample_annotations::ActiveModel {
        sample_id: Set(1),
        annotation_type_id: Set(tissue.id),
        text: Set("liver".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn explicit_columns_are_used_verbatim_with_empty_cells_for_gaps() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let service = AnnotationService::new(db);

    // "age" is not in the vocabulary at all; it still gets its (empty) column.
    let tsv = service
        .export_annotations(Some(vec!["tissue".to_string(), "age".to_string()]))
        .await?;

    let expected = "experiment\tsample_name\tml_data_source\ttissue\tage\n\
                    E\tS1\t\tliver\t\n\
                    E\tS2\t\t\t\n";
    assert_eq!(tsv, expected);

    Ok(())
}

#[tokio::test]
async fn explicit_column_order_and_duplicates_are_preserved() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;
    let service = AnnotationService::new(db);

    let tsv = service
        .export_annotations(Some(vec![
            "age".to_string(),
            "tissue".to_string(),
            "tissue".to_string(),
        ]))
        .await?;

    let mut lines = tsv.lines();
    assert_eq!(
        lines.next(),
        Some("experiment\tsample_name\tml_data_source\tage\ttissue\ttissue")
    );
    assert_eq!(lines.next(), Some("E\tS1\t\t\tliver\tliver"));

    Ok(())
}

#[tokio::test]
async fn default_columns_are_the_full_vocabulary_sorted_by_name() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;

    // Extend the vocabulary so the alphabetical ordering is observable;
    // insertion order is deliberately not alphabetical.
    annotation_types::Entity::insert_many([
        annotation_types::ActiveModel {
            typename: Set("strain".to_string()),
            description: Set(None),
            ..Default::default()
        },
        annotation_types::ActiveModel {
            typename: Set("age".to_string()),
            description: Set(None),
            ..Default::default()
        },
    ])
    .exec(&db)
    .await?;

    let service = AnnotationService::new(db);
    let tsv = service.export_annotations(None).await?;

    assert_eq!(
        tsv.lines().next(),
        Some("experiment\tsample_name\tml_data_source\tage\tstrain\ttissue")
    );

    Ok(())
}

#[tokio::test]
async fn ml_data_source_is_surfaced_when_present() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;

    experiments::ActiveModel {
        accession: Set("E2".to_string()),
        name: Set("Second experiment".to_string()),
        description: Set(None),
    }
    .insert(&db)
    .await?;
    samples::ActiveModel {
        id: Set(3),
        name: Set("S3".to_string()),
        ml_data_source: Set(Some("S3.CEL".to_string())),
    }
    .insert(&db)
    .await?;
    experiment_samples::ActiveModel {
        experiment_accession: Set("E2".to_string()),
        sample_id: Set(3),
    }
    .insert(&db)
    .await?;

    let service = AnnotationService::new(db);
    let tsv = service
        .export_annotations(Some(vec!["tissue".to_string()]))
        .await?;

    assert!(tsv.contains("E2\tS3\tS3.CEL\t\n"));

    Ok(())
}

#[tokio::test]
async fn sample_in_no_experiment_produces_no_row() -> Result<()> {
    let (db, _temp_file) = setup_fixture().await?;

    // An orphan sample must not appear in the export.
    samples::ActiveModel {
        id: Set(9),
        name: Set("Orphan".to_string()),
        ml_data_source: Set(None),
    }
    .insert(&db)
    .await?;

    let service = AnnotationService::new(db);
    let tsv = service.export_annotations(None).await?;

    assert!(!tsv.contains("Orphan"));
    assert_eq!(tsv.lines().count(), 3); // header + S1 + S2

    Ok(())
}
