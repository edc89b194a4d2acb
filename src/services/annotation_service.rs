use std::error::Error;

use csv::WriterBuilder;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::debug;

use crate::database::entities::{
    annotation_types, annotation_types::Entity as AnnotationTypes,
    experiments::Entity as Experiments, samples::Entity as Samples,
};
use crate::errors::QueryError;
use crate::services::SampleService;

pub struct AnnotationService {
    db: DatabaseConnection,
}

impl AnnotationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_annotation_types(
        &self,
    ) -> Result<Vec<annotation_types::Model>, QueryError> {
        Ok(AnnotationTypes::find().all(&self.db).await?)
    }

    /// Build the tab-delimited annotation table: one row per
    /// (experiment, sample) pair, one column per annotation type.
    ///
    /// An explicit `annotation_types` list is used verbatim, order and
    /// duplicates included, and a name missing from the vocabulary simply
    /// yields an all-empty column. Without an explicit list, all known
    /// typenames are used in alphabetical order. A sample missing a value
    /// for a column yields an empty cell.
    pub async fn export_annotations(
        &self,
        annotation_types: Option<Vec<String>>,
    ) -> Result<String, QueryError> {
        let columns = match annotation_types {
            Some(names) => names,
            None => AnnotationTypes::find()
                .order_by_asc(annotation_types::Column::Typename)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|at| at.typename)
                .collect(),
        };

        let mut header: Vec<String> =
            vec!["experiment".into(), "sample_name".into(), "ml_data_source".into()];
        header.extend(columns.iter().cloned());

        let sample_service = SampleService::new(self.db.clone());
        let mut rows: Vec<Vec<String>> = Vec::new();

        for experiment in Experiments::find().all(&self.db).await? {
            for sample in experiment.find_related(Samples).all(&self.db).await? {
                let annotations = sample_service.annotation_map(sample.id).await?;
                let mut row = vec![
                    experiment.accession.clone(),
                    sample.name.clone(),
                    sample.ml_data_source.clone().unwrap_or_default(),
                ];
                for column in &columns {
                    row.push(annotations.get(column).cloned().unwrap_or_default());
                }
                rows.push(row);
            }
        }

        debug!(
            "annotation export: {} columns, {} rows",
            header.len(),
            rows.len()
        );

        render_tsv(&header, &rows).map_err(|e| QueryError::Export(e.to_string()))
    }
}

fn render_tsv(header: &[String], rows: &[Vec<String>]) -> Result<String, Box<dyn Error>> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(vec![]);

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}
