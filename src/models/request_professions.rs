use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table linking requests to their profession tags.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_professions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub request_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub profession_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
    #[sea_orm(
        belongs_to = "super::professions::Entity",
        from = "Column::ProfessionId",
        to = "super::professions::Column::Id"
    )]
    Profession,
}

impl ActiveModelBehavior for ActiveModel {}
