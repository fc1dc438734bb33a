use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `professions` table.
///
/// Named skill tag. Only approved professions may be used as request tags.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub approved: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::workers::Entity> for Entity {
    fn to() -> RelationDef {
        super::worker_professions::Relation::Worker.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::worker_professions::Relation::Profession.def().rev())
    }
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        super::request_professions::Relation::Request.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::request_professions::Relation::Profession.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
