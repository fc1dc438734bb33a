use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Proposal lifecycle, stored as an uppercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
}

/// SeaORM entity for the `proposals` table — a worker's bid on a request.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proposals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub worker_id: Uuid,
    pub cost: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: Status,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::workers::Entity",
        from = "Column::WorkerId",
        to = "super::workers::Column::Id"
    )]
    Worker,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl Related<super::workers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/requests/{id}/proposals.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposal {
    pub cost: i32,
    pub message: String,
}

/// A proposal as shown to the request owner, with worker contact details.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalView {
    pub id: Uuid,
    pub worker: String,
    pub worker_id: Uuid,
    pub worker_mobile_number: Option<String>,
    pub cost: i32,
    pub message: String,
    pub request: String,
    pub status: Status,
}

/// A proposal as shown to the worker who made it, with the request embedded.
#[derive(Debug, Clone, Serialize)]
pub struct OwnProposalView {
    pub request: super::requests::RequestView,
    pub cost: i32,
    pub message: String,
    pub status: Status,
}
