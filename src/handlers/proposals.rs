use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::{AuthenticatedUser, AuthenticatedWorker};
use crate::db::images as image_db;
use crate::db::proposals as proposal_db;
use crate::db::requests as request_db;
use crate::db::users as user_db;
use crate::db::workers as worker_db;
use crate::error::ApiError;
use crate::handlers::{created, success};
use crate::models::proposals::{
    CreateProposal, OwnProposalView, ProposalView, Status as ProposalStatus,
};
use crate::models::requests::{RequestView, Status as RequestStatus};

/// POST /api/requests/{request_id}/proposals — a worker bids on a request.
pub async fn submit_proposal(
    worker: AuthenticatedWorker,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateProposal>,
) -> Result<HttpResponse, ApiError> {
    let request_id = path.into_inner();

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Request {request_id} not found")))?;

    if request.user_id == worker.user.id {
        return Err(ApiError::validation("You cannot bid on your own request"));
    }

    if request.status != RequestStatus::Open {
        return Err(ApiError::conflict("Only open requests accept proposals"));
    }

    let proposal =
        proposal_db::insert_proposal(db.get_ref(), body.into_inner(), request_id, worker.worker.id)
            .await?;

    tracing::info!(proposal_id = %proposal.id, request_id = %request_id, "proposal submitted");
    Ok(created(worker.user.username))
}

/// DELETE /api/proposals/{proposal_id} — a worker withdraws an open bid.
pub async fn cancel_proposal(
    worker: AuthenticatedWorker,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let proposal_id = path.into_inner();

    let proposal = proposal_db::get_proposal_by_id(db.get_ref(), proposal_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Proposal {proposal_id} not found")))?;

    if proposal.worker_id != worker.worker.id {
        return Err(ApiError::forbidden("You can only cancel your own bids"));
    }

    if proposal.status != ProposalStatus::Open {
        return Err(ApiError::conflict("Only OPEN bids can be cancelled."));
    }

    let request = request_db::get_request_by_id(db.get_ref(), proposal.request_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Request for this proposal no longer exists"))?;

    proposal_db::delete_proposal(db.get_ref(), proposal_id).await?;

    Ok(success(request.subject))
}

/// GET /api/requests/{request_id}/proposals — the request owner lists the
/// bids on their request, with worker contact details.
pub async fn get_proposals_for_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let request_id = path.into_inner();

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Request {request_id} not found")))?;

    if request.user_id != user.0.id {
        return Err(ApiError::forbidden(
            "You can only view proposals on your own requests",
        ));
    }

    let proposals = proposal_db::get_proposals_by_request_id(db.get_ref(), request_id).await?;

    let mut views = Vec::with_capacity(proposals.len());
    for proposal in proposals {
        let worker = worker_db::get_worker_by_id(db.get_ref(), proposal.worker_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Worker for this proposal no longer exists"))?;
        let worker_user = user_db::get_user_by_id(db.get_ref(), worker.user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User for this worker no longer exists"))?;
        let mobile = user_db::mobile_number_for_user(db.get_ref(), worker.user_id).await?;

        views.push(ProposalView {
            id: proposal.id,
            worker: worker_user.username,
            worker_id: worker.id,
            worker_mobile_number: mobile,
            cost: proposal.cost,
            message: proposal.message,
            request: request.subject.clone(),
            status: proposal.status,
        });
    }

    Ok(success(views))
}

/// GET /api/worker/proposals — the calling worker's bids, each embedding
/// its request.
pub async fn get_own_proposals(
    worker: AuthenticatedWorker,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let proposals =
        proposal_db::get_proposals_by_worker_id(db.get_ref(), worker.worker.id).await?;

    let mut views = Vec::with_capacity(proposals.len());
    for proposal in proposals {
        let request = request_db::get_request_by_id(db.get_ref(), proposal.request_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Request for this proposal no longer exists"))?;

        let tags = request_db::tag_names_for_request(db.get_ref(), &request).await?;
        let images = image_db::urls_for_request(db.get_ref(), request.id).await?;

        views.push(OwnProposalView {
            request: RequestView::new(request, tags, images),
            cost: proposal.cost,
            message: proposal.message,
            status: proposal.status,
        });
    }

    Ok(success(views))
}

/// POST /api/requests/{request_id}/proposals/{proposal_id}/accept — the
/// request owner accepts a bid.
///
/// The open-status check plus the transaction guarantee a request never
/// ends up with two accepted proposals.
pub async fn accept_proposal(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (request_id, proposal_id) = path.into_inner();

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Request {request_id} not found")))?;

    if request.user_id != user.0.id {
        return Err(ApiError::forbidden(
            "You can only accept proposals on your own requests",
        ));
    }

    let proposal = proposal_db::get_proposal_by_id(db.get_ref(), proposal_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Proposal {proposal_id} not found")))?;

    if proposal.request_id != request_id {
        return Err(ApiError::not_found(
            "Proposal does not belong to this request",
        ));
    }

    let bidder = worker_db::get_worker_by_id(db.get_ref(), proposal.worker_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker for this proposal no longer exists"))?;

    if bidder.user_id == request.user_id {
        return Err(ApiError::validation("You cannot accept your own proposal"));
    }

    // The status flip is conditional inside the transaction: a concurrent
    // accept that lost the race sees zero rows affected and gets the 409.
    let txn = db.begin().await?;
    if !request_db::mark_accepted_if_open(&txn, request_id).await? {
        txn.rollback().await?;
        return Err(ApiError::conflict(
            "Request already has an accepted proposal",
        ));
    }
    proposal_db::set_accepted(&txn, proposal).await?;
    txn.commit().await?;

    tracing::info!(request_id = %request_id, proposal_id = %proposal_id, "proposal accepted");
    Ok(success("Proposal accepted"))
}
