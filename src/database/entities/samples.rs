use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Column name used for this sample in the model training data, if any.
    pub ml_data_source: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experiment_samples::Entity")]
    ExperimentSamples,
    #[sea_orm(has_many = "super::activities::Entity")]
    Activities,
    #[sea_orm(has_many = "super::sample_annotations::Entity")]
    SampleAnnotations,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::sample_annotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SampleAnnotations.def()
    }
}

// Many-to-many to experiments through the experiment_samples join table.
impl Related<super::experiments::Entity> for Entity {
    fn to() -> RelationDef {
        super::experiment_samples::Relation::Experiments.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experiment_samples::Relation::Samples.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
