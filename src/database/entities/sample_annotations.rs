use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single key-value annotation on a sample. At most one row exists per
/// (sample, annotation_type) pair, which is what lets a sample's
/// annotations collapse into a plain map.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_annotations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sample_id: i32,
    pub annotation_type_id: i32,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::samples::Entity",
        from = "Column::SampleId",
        to = "super::samples::Column::Id"
    )]
    Samples,
    #[sea_orm(
        belongs_to = "super::annotation_types::Entity",
        from = "Column::AnnotationTypeId",
        to = "super::annotation_types::Column::Id"
    )]
    AnnotationTypes,
}

impl Related<super::samples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl Related<super::annotation_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnnotationTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
