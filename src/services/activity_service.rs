use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

use crate::database::entities::{activities, nodes, activities::Entity as Activities};
use crate::errors::QueryError;
use crate::filters::ActivityFilter;

pub struct ActivityService {
    db: DatabaseConnection,
}

impl ActivityService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List activity rows. The `mlmodel` scope is a one-hop join: the
    /// model is not stored on the activity, it is reached through the
    /// node the activity belongs to. Always returns all matching rows.
    pub async fn find_activities(
        &self,
        filter: &ActivityFilter,
    ) -> Result<Vec<activities::Model>, QueryError> {
        let mut query = Activities::find();

        if let Some(mlmodel_id) = filter.mlmodel {
            query = query
                .join(JoinType::InnerJoin, activities::Relation::Nodes.def())
                .filter(nodes::Column::MlmodelId.eq(mlmodel_id));
        }

        if let Some(samples) = &filter.samples {
            query = query.filter(activities::Column::SampleId.is_in(samples.iter().copied()));
        }

        if let Some(node_ids) = &filter.nodes {
            query = query.filter(activities::Column::NodeId.is_in(node_ids.iter().copied()));
        }

        Ok(query.all(&self.db).await?)
    }
}
