use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::database::entities::{
    activities, experiment_samples, experiments, activities::Entity as Activities,
    experiment_samples::Entity as ExperimentSamples, experiments::Entity as Experiments,
};
use crate::errors::QueryError;
use crate::filters::ExperimentFilter;

/// Experiment as exposed to callers, with its member sample ids embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentView {
    pub accession: String,
    pub name: String,
    pub description: Option<String>,
    pub samples: Vec<i32>,
}

pub struct ExperimentService {
    db: DatabaseConnection,
}

impl ExperimentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_experiment(&self, accession: &str) -> Result<ExperimentView, QueryError> {
        let experiment = Experiments::find_by_id(accession.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("experiment {}", accession)))?;
        let mut views = self.attach_samples(vec![experiment]).await?;
        views
            .pop()
            .ok_or_else(|| QueryError::NotFound(format!("experiment {}", accession)))
    }

    /// List experiments, optionally narrowed to those touched by one
    /// node. The node filter is a three-hop resolution: the node's
    /// activities name samples, and the samples' memberships name
    /// experiments. Set semantics all the way, so iteration order of the
    /// intermediate rows never changes the result.
    pub async fn find_experiments(
        &self,
        filter: &ExperimentFilter,
    ) -> Result<Vec<ExperimentView>, QueryError> {
        let mut query = Experiments::find();

        if let Some(node_id) = filter.node {
            let sample_ids: HashSet<i32> = Activities::find()
                .filter(activities::Column::NodeId.eq(node_id))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|a| a.sample_id)
                .collect();

            if sample_ids.is_empty() {
                return Ok(Vec::new());
            }

            let accessions: HashSet<String> = ExperimentSamples::find()
                .filter(experiment_samples::Column::SampleId.is_in(sample_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|link| link.experiment_accession)
                .collect();

            if accessions.is_empty() {
                return Ok(Vec::new());
            }

            query = query.filter(experiments::Column::Accession.is_in(accessions));
        }

        let rows = query.all(&self.db).await?;
        self.attach_samples(rows).await
    }

    async fn attach_samples(
        &self,
        rows: Vec<experiments::Model>,
    ) -> Result<Vec<ExperimentView>, QueryError> {
        let accessions: Vec<String> = rows.iter().map(|e| e.accession.clone()).collect();

        let mut samples_by_experiment: HashMap<String, Vec<i32>> = HashMap::new();
        for link in ExperimentSamples::find()
            .filter(experiment_samples::Column::ExperimentAccession.is_in(accessions))
            .all(&self.db)
            .await?
        {
            samples_by_experiment
                .entry(link.experiment_accession)
                .or_default()
                .push(link.sample_id);
        }

        Ok(rows
            .into_iter()
            .map(|e| {
                let samples = samples_by_experiment.remove(&e.accession).unwrap_or_default();
                ExperimentView {
                    accession: e.accession,
                    name: e.name,
                    description: e.description,
                    samples,
                }
            })
            .collect())
    }
}
