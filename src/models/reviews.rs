use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review direction, stored as an uppercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    /// A customer reviewing a worker after a closed job.
    #[sea_orm(string_value = "CUSTOMER_WORKER")]
    CustomerWorker,
    /// A worker reviewing a customer.
    #[sea_orm(string_value = "WORKER_CUSTOMER")]
    WorkerCustomer,
}

/// SeaORM entity for the `reviews` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub worker_id: Uuid,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub kind: Kind,
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
    #[sea_orm(
        belongs_to = "super::workers::Entity",
        from = "Column::WorkerId",
        to = "super::workers::Column::Id"
    )]
    Worker,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::workers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/requests/{id}/reviews.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub rating: i32,
    pub message: String,
}

/// Serialized view of a review (rating + message only).
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub message: String,
    pub rating: i32,
}

impl From<Model> for ReviewView {
    fn from(m: Model) -> Self {
        Self {
            message: m.message,
            rating: m.rating,
        }
    }
}
