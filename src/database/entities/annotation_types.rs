use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "annotation_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub typename: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sample_annotations::Entity")]
    SampleAnnotations,
}

impl Related<super::sample_annotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SampleAnnotations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
