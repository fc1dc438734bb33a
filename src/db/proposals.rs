use sea_orm::*;
use uuid::Uuid;

use crate::models::proposals::{self, CreateProposal, Status};

/// Insert a new proposal (status Open).
pub async fn insert_proposal(
    db: &DatabaseConnection,
    input: CreateProposal,
    request_id: Uuid,
    worker_id: Uuid,
) -> Result<proposals::Model, DbErr> {
    let new_proposal = proposals::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(request_id),
        worker_id: Set(worker_id),
        cost: Set(input.cost),
        message: Set(input.message),
        status: Set(Status::Open),
        created_at: Set(chrono::Utc::now()),
    };

    new_proposal.insert(db).await
}

/// Fetch a single proposal by ID.
pub async fn get_proposal_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<proposals::Model>, DbErr> {
    proposals::Entity::find_by_id(id).one(db).await
}

/// Fetch all proposals on a request.
pub async fn get_proposals_by_request_id(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<proposals::Model>, DbErr> {
    proposals::Entity::find()
        .filter(proposals::Column::RequestId.eq(request_id))
        .all(db)
        .await
}

/// Fetch all proposals made by a worker.
pub async fn get_proposals_by_worker_id(
    db: &DatabaseConnection,
    worker_id: Uuid,
) -> Result<Vec<proposals::Model>, DbErr> {
    proposals::Entity::find()
        .filter(proposals::Column::WorkerId.eq(worker_id))
        .all(db)
        .await
}

/// The accepted proposal on a request, if one exists.
pub async fn accepted_for_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Option<proposals::Model>, DbErr> {
    proposals::Entity::find()
        .filter(proposals::Column::RequestId.eq(request_id))
        .filter(proposals::Column::Status.eq(Status::Accepted))
        .one(db)
        .await
}

/// Mark a proposal accepted. Runs inside the accept transaction.
pub async fn set_accepted<C: ConnectionTrait>(
    db: &C,
    proposal: proposals::Model,
) -> Result<proposals::Model, DbErr> {
    let mut active: proposals::ActiveModel = proposal.into();
    active.status = Set(Status::Accepted);
    active.update(db).await
}

/// Delete a proposal by ID.
pub async fn delete_proposal(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    proposals::Entity::delete_by_id(id).exec(db).await
}
