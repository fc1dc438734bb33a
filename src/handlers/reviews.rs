use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::proposals as proposal_db;
use crate::db::requests as request_db;
use crate::db::reviews as review_db;
use crate::error::ApiError;
use crate::handlers::{created, success};
use crate::models::requests::Status as RequestStatus;
use crate::models::reviews::{CreateReview, Kind, ReviewView};

/// POST /api/requests/{request_id}/reviews — the request owner reviews the
/// worker whose proposal was accepted. Closes the request.
pub async fn write_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    let request_id = path.into_inner();
    let input = body.into_inner();

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Request {request_id} not found")))?;

    if request.user_id != user.0.id {
        return Err(ApiError::forbidden("You can only review your own requests"));
    }

    // A review needs a completed job: exactly the accepted proposal.
    let accepted = proposal_db::accepted_for_request(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::conflict("Request has no accepted proposal to review"))?;

    let txn = db.begin().await?;
    request_db::set_status(&txn, request, RequestStatus::Closed).await?;
    review_db::insert_review(
        &txn,
        user.0.id,
        accepted.worker_id,
        input.rating,
        input.message,
        Kind::CustomerWorker,
    )
    .await?;
    txn.commit().await?;

    tracing::info!(request_id = %request_id, worker_id = %accepted.worker_id, "review written");
    Ok(created(user.0.username))
}

/// GET /api/reviews — worker→customer reviews the caller has received.
pub async fn get_received_reviews(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let reviews: Vec<ReviewView> =
        review_db::get_reviews_for_user(db.get_ref(), user.0.id, Kind::WorkerCustomer)
            .await?
            .into_iter()
            .map(ReviewView::from)
            .collect();

    Ok(success(reviews))
}
