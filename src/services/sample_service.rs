use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};
use serde::Serialize;

use crate::database::entities::{
    annotation_types, experiment_samples, experiments, sample_annotations, samples,
    experiment_samples::Entity as ExperimentSamples, experiments::Entity as Experiments,
    sample_annotations::Entity as SampleAnnotations, samples::Entity as Samples,
};
use crate::errors::QueryError;
use crate::filters::SampleFilter;

/// Sample as exposed to callers, with its annotations collapsed into an
/// immutable typename-to-value map.
#[derive(Debug, Clone, Serialize)]
pub struct SampleView {
    pub id: i32,
    pub name: String,
    pub ml_data_source: Option<String>,
    pub annotations: BTreeMap<String, String>,
}

pub struct SampleService {
    db: DatabaseConnection,
}

impl SampleService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_sample(&self, id: i32) -> Result<SampleView, QueryError> {
        let sample = Samples::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("sample {}", id)))?;
        let annotations = self.annotation_map(sample.id).await?;
        Ok(Self::to_view(sample, annotations))
    }

    /// List samples. An `experiment` filter naming an unknown accession
    /// narrows to nothing rather than failing the query.
    pub async fn find_samples(&self, filter: &SampleFilter) -> Result<Vec<SampleView>, QueryError> {
        let mut query = Samples::find();

        if let Some(accession) = &filter.experiment {
            let experiment = Experiments::find_by_id(accession.clone()).one(&self.db).await?;
            let Some(experiment) = experiment else {
                return Ok(Vec::new());
            };
            let member_ids: Vec<i32> = ExperimentSamples::find()
                .filter(
                    experiment_samples::Column::ExperimentAccession.eq(experiment.accession.clone()),
                )
                .all(&self.db)
                .await?
                .into_iter()
                .map(|link| link.sample_id)
                .collect();
            if member_ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(samples::Column::Id.is_in(member_ids));
        }

        if let Some(ids) = &filter.ids {
            query = query.filter(samples::Column::Id.is_in(ids.iter().copied()));
        }

        let rows = query.all(&self.db).await?;
        let mut views = Vec::with_capacity(rows.len());
        for sample in rows {
            let annotations = self.annotation_map(sample.id).await?;
            views.push(Self::to_view(sample, annotations));
        }
        Ok(views)
    }

    /// Experiments a sample belongs to. `NotFound` if the sample itself
    /// does not exist.
    pub async fn experiments_for_sample(
        &self,
        sample_id: i32,
    ) -> Result<Vec<experiments::Model>, QueryError> {
        let sample = Samples::find_by_id(sample_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("sample {}", sample_id)))?;
        Ok(sample.find_related(Experiments).all(&self.db).await?)
    }

    /// Collapse a sample's annotation rows into one map. The unique
    /// (sample, annotation_type) constraint guarantees no key collides.
    pub async fn annotation_map(
        &self,
        sample_id: i32,
    ) -> Result<BTreeMap<String, String>, QueryError> {
        let rows = SampleAnnotations::find()
            .filter(sample_annotations::Column::SampleId.eq(sample_id))
            .find_also_related(annotation_types::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(annotation, annotation_type)| {
                annotation_type.map(|at| (at.typename, annotation.text))
            })
            .collect())
    }

    fn to_view(sample: samples::Model, annotations: BTreeMap<String, String>) -> SampleView {
        SampleView {
            id: sample.id,
            name: sample.name,
            ml_data_source: sample.ml_data_source,
            annotations,
        }
    }
}
