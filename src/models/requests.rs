use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Request lifecycle, stored as an uppercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

/// SeaORM entity for the `requests` table — a customer's posted job.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub range_min: i32,
    pub range_max: i32,
    pub status: Status,
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
    #[sea_orm(has_many = "super::images::Entity")]
    Images,
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

impl Related<super::images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::professions::Entity> for Entity {
    fn to() -> RelationDef {
        super::request_professions::Relation::Profession.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::request_professions::Relation::Request.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/requests.
///
/// `tags` are profession names; `images` are base64-encoded JPEG payloads
/// persisted to the image directory on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub subject: String,
    pub description: String,
    pub range_min: i32,
    pub range_max: i32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Serialized view of a request with its tags and image urls resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub range_min: i32,
    pub range_max: i32,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_worker_id: Option<Uuid>,
}

impl RequestView {
    pub fn new(request: Model, tags: Vec<String>, images: Vec<String>) -> Self {
        Self {
            id: request.id,
            subject: request.subject,
            description: request.description,
            range_min: request.range_min,
            range_max: request.range_max,
            tags,
            images,
            status: request.status,
            accepted_worker_id: None,
        }
    }

    pub fn with_accepted_worker(mut self, worker_id: Option<Uuid>) -> Self {
        self.accepted_worker_id = worker_id;
        self
    }
}
