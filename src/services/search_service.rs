use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};
use serde::Serialize;
use tracing::debug;

use crate::database::entities::{
    experiment_samples, experiment_samples::Entity as ExperimentSamples,
    experiments::Entity as Experiments, samples::Entity as Samples,
};
use crate::errors::QueryError;
use crate::search::{SearchBackend, SearchKind};

/// One merged search hit: the kind-specific shapes collapse into this
/// single response form, cross-referenced both ways (experiment hits
/// carry their sample pks, sample hits their experiment accessions).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub item_type: String,
    pub pk: String,
    pub description: String,
    pub snippet: String,
    pub related_items: Vec<String>,
}

pub struct SearchService {
    db: DatabaseConnection,
    backend: Arc<dyn SearchBackend>,
}

impl SearchService {
    pub fn new(db: DatabaseConnection, backend: Arc<dyn SearchBackend>) -> Self {
        Self { db, backend }
    }

    /// Run a free-text query over experiments and samples and merge the
    /// ranked hits into one list, preserving the backend's order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, QueryError> {
        let hits = self
            .backend
            .search(&[SearchKind::Experiment, SearchKind::Sample], query)
            .await?;

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let snippet = hit.highlighted.join(" ...");
            let result = match hit.kind {
                SearchKind::Experiment => self.experiment_result(&hit.pk, snippet).await?,
                SearchKind::Sample => self.sample_result(&hit.pk, snippet).await?,
                SearchKind::Other => Some(SearchResult {
                    item_type: SearchKind::Other.as_str().to_string(),
                    pk: hit.pk,
                    description: "unrecognized result".to_string(),
                    snippet,
                    related_items: Vec::new(),
                }),
            };
            match result {
                Some(result) => results.push(result),
                // The index can lag behind the store; drop stale hits.
                None => debug!("dropping stale search hit"),
            }
        }
        Ok(results)
    }

    async fn experiment_result(
        &self,
        pk: &str,
        snippet: String,
    ) -> Result<Option<SearchResult>, QueryError> {
        let Some(experiment) = Experiments::find_by_id(pk.to_string()).one(&self.db).await? else {
            return Ok(None);
        };

        let related_items: Vec<String> = ExperimentSamples::find()
            .filter(experiment_samples::Column::ExperimentAccession.eq(pk))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| link.sample_id.to_string())
            .collect();

        Ok(Some(SearchResult {
            item_type: SearchKind::Experiment.as_str().to_string(),
            pk: pk.to_string(),
            description: experiment.name,
            snippet,
            related_items,
        }))
    }

    async fn sample_result(
        &self,
        pk: &str,
        snippet: String,
    ) -> Result<Option<SearchResult>, QueryError> {
        let Ok(sample_id) = pk.parse::<i32>() else {
            return Ok(None);
        };
        let Some(sample) = Samples::find_by_id(sample_id).one(&self.db).await? else {
            return Ok(None);
        };

        let related_items: Vec<String> = sample
            .find_related(Experiments)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|e| e.accession)
            .collect();

        Ok(Some(SearchResult {
            item_type: SearchKind::Sample.as_str().to_string(),
            pk: pk.to_string(),
            description: sample.name,
            snippet,
            related_items,
        }))
    }
}
