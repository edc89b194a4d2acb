use std::collections::HashSet;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use crate::database::entities::{
    nodes, participations, nodes::Entity as Nodes, participations::Entity as Participations,
};
use crate::errors::QueryError;
use crate::filters::NodeFilter;

pub struct NodeService {
    db: DatabaseConnection,
}

impl NodeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_node(&self, id: i32) -> Result<nodes::Model, QueryError> {
        Nodes::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("node {}", id)))
    }

    /// List nodes, optionally narrowed by the heavy-gene intersection
    /// filter, a model scope, and name filters (exact or membership).
    pub async fn find_nodes(&self, filter: &NodeFilter) -> Result<Vec<nodes::Model>, QueryError> {
        let mut query = Nodes::find();

        if let Some(genes) = &filter.heavy_genes {
            if !genes.is_empty() {
                match self.nodes_heavy_in_all(genes).await? {
                    Some(node_ids) if !node_ids.is_empty() => {
                        query = query.filter(nodes::Column::Id.is_in(node_ids));
                    }
                    // Intersection came up empty: nothing can match.
                    _ => return Ok(Vec::new()),
                }
            }
        }

        if let Some(mlmodel_id) = filter.mlmodel {
            query = query.filter(nodes::Column::MlmodelId.eq(mlmodel_id));
        }

        if let Some(name) = &filter.name {
            query = query.filter(nodes::Column::Name.eq(name.clone()));
        }

        if let Some(names) = &filter.name_in {
            query = query.filter(nodes::Column::Name.is_in(names.clone()));
        }

        Ok(query.all(&self.db).await?)
    }

    /// Intersect, per listed gene, the sets of nodes that have a
    /// participation for that gene. A node survives only if every listed
    /// gene participates in it.
    async fn nodes_heavy_in_all(
        &self,
        genes: &HashSet<i32>,
    ) -> Result<Option<HashSet<i32>>, QueryError> {
        let mut related: Option<HashSet<i32>> = None;

        for gene_id in genes {
            let gene_nodes: HashSet<i32> = Participations::find()
                .filter(participations::Column::GeneId.eq(*gene_id))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|p| p.node_id)
                .collect();

            related = Some(match related {
                None => gene_nodes,
                Some(acc) => &acc & &gene_nodes,
            });

            // Already empty, no later gene can bring nodes back.
            if related.as_ref().is_some_and(|r| r.is_empty()) {
                debug!("heavy_genes intersection emptied at gene {}", gene_id);
                break;
            }
        }

        Ok(related)
    }
}
