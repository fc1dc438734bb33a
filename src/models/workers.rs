use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `workers` table.
///
/// A worker row marks a user as a service provider; skills live in the
/// `worker_professions` junction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::proposals::Entity")]
    Proposals,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::professions::Entity> for Entity {
    fn to() -> RelationDef {
        super::worker_professions::Relation::Profession.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::worker_professions::Relation::Worker.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Public worker profile as shown to customers.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerProfile {
    pub username: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub email: String,
    pub mobile: Option<String>,
    pub reviews: Vec<super::reviews::ReviewView>,
}
