use std::collections::HashMap;

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::database::entities::{
    edges, ml_models, edges::Entity as Edges, ml_models::Entity as MlModels,
};
use crate::errors::QueryError;
use crate::filters::{EdgeFilter, EdgeOrdering};

/// Edge as exposed to callers: `directed` is resolved from the owning
/// model rather than stored per row.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub id: i32,
    pub gene1: i32,
    pub gene2: i32,
    pub mlmodel: i32,
    pub weight: f64,
    pub directed: bool,
}

pub struct EdgeService {
    db: DatabaseConnection,
}

impl EdgeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_edge(&self, id: i32) -> Result<EdgeView, QueryError> {
        let edge = Edges::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("edge {}", id)))?;
        let mut views = self.resolve_directed(vec![edge]).await?;
        views
            .pop()
            .ok_or_else(|| QueryError::NotFound(format!("edge {}", id)))
    }

    /// List edges. The `genes` filter is a symmetric union: an edge
    /// matches when either endpoint is in the listed set, and each edge
    /// appears once even if both endpoints match.
    pub async fn find_edges(&self, filter: &EdgeFilter) -> Result<Vec<EdgeView>, QueryError> {
        let mut query = Edges::find();

        if let Some(genes) = &filter.genes {
            if !genes.is_empty() {
                let either_endpoint = Condition::any()
                    .add(edges::Column::Gene1Id.is_in(genes.iter().copied()))
                    .add(edges::Column::Gene2Id.is_in(genes.iter().copied()));
                query = query.filter(either_endpoint);
            }
        }

        if let Some(gene1) = &filter.gene1 {
            query = query.filter(edges::Column::Gene1Id.is_in(gene1.iter().copied()));
        }

        if let Some(gene2) = &filter.gene2 {
            query = query.filter(edges::Column::Gene2Id.is_in(gene2.iter().copied()));
        }

        if let Some(mlmodel_id) = filter.mlmodel {
            query = query.filter(edges::Column::MlmodelId.eq(mlmodel_id));
        }

        query = match filter.order_by {
            Some(EdgeOrdering::WeightAsc) => query.order_by_asc(edges::Column::Weight),
            Some(EdgeOrdering::WeightDesc) => query.order_by_desc(edges::Column::Weight),
            None => query,
        };

        let rows = query.all(&self.db).await?;
        self.resolve_directed(rows).await
    }

    async fn resolve_directed(
        &self,
        rows: Vec<edges::Model>,
    ) -> Result<Vec<EdgeView>, QueryError> {
        let model_ids: Vec<i32> = {
            let mut ids: Vec<i32> = rows.iter().map(|e| e.mlmodel_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };

        let directed_by_model: HashMap<i32, bool> = MlModels::find()
            .filter(ml_models::Column::Id.is_in(model_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m.directed_g2g_edge))
            .collect();

        Ok(rows
            .into_iter()
            .map(|e| EdgeView {
                id: e.id,
                gene1: e.gene1_id,
                gene2: e.gene2_id,
                mlmodel: e.mlmodel_id,
                weight: e.weight,
                directed: directed_by_model.get(&e.mlmodel_id).copied().unwrap_or(false),
            })
            .collect())
    }
}
