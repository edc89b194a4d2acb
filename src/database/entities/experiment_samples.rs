use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table for the experiment/sample many-to-many relation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiment_samples")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub experiment_accession: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sample_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiments::Entity",
        from = "Column::ExperimentAccession",
        to = "super::experiments::Column::Accession"
    )]
    Experiments,
    #[sea_orm(
        belongs_to = "super::samples::Entity",
        from = "Column::SampleId",
        to = "super::samples::Column::Id"
    )]
    Samples,
}

impl Related<super::experiments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiments.def()
    }
}

impl Related<super::samples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
