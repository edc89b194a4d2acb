use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::database::entities::{participations, participations::Entity as Participations};
use crate::errors::QueryError;
use crate::filters::ParticipationFilter;

pub struct ParticipationService {
    db: DatabaseConnection,
}

impl ParticipationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List node/gene membership rows. Always returns all matching rows.
    pub async fn find_participations(
        &self,
        filter: &ParticipationFilter,
    ) -> Result<Vec<participations::Model>, QueryError> {
        let mut query = Participations::find();

        if let Some(node_ids) = &filter.nodes {
            query = query.filter(participations::Column::NodeId.is_in(node_ids.iter().copied()));
        }

        if let Some(gene_ids) = &filter.genes {
            query = query.filter(participations::Column::GeneId.is_in(gene_ids.iter().copied()));
        }

        Ok(query.all(&self.db).await?)
    }
}
