use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub accession: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experiment_samples::Entity")]
    ExperimentSamples,
}

impl Related<super::experiment_samples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperimentSamples.def()
    }
}

// Many-to-many to samples through the experiment_samples join table.
impl Related<super::samples::Entity> for Entity {
    fn to() -> RelationDef {
        super::experiment_samples::Relation::Samples.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experiment_samples::Relation::Experiments.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
