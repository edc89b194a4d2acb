use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A weighted gene-gene relation discovered by one model. The same gene
/// pair may appear once per model; records are never merged across models.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "edges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gene1_id: i32,
    pub gene2_id: i32,
    pub mlmodel_id: i32,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genes::Entity",
        from = "Column::Gene1Id",
        to = "super::genes::Column::Id"
    )]
    Gene1,
    #[sea_orm(
        belongs_to = "super::genes::Entity",
        from = "Column::Gene2Id",
        to = "super::genes::Column::Id"
    )]
    Gene2,
    #[sea_orm(
        belongs_to = "super::ml_models::Entity",
        from = "Column::MlmodelId",
        to = "super::ml_models::Column::Id"
    )]
    MlModels,
}

impl Related<super::ml_models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MlModels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
