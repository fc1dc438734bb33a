use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::reviews as review_db;
use crate::db::users as user_db;
use crate::db::workers as worker_db;
use crate::error::ApiError;
use crate::handlers::success;
use crate::models::reviews::{Kind, ReviewView};
use crate::models::workers::WorkerProfile;

/// GET /api/workers/{worker_id} — public profile of a worker, with the
/// customer→worker reviews they have received.
pub async fn get_worker_profile(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let worker_id = path.into_inner();

    let worker = worker_db::get_worker_by_id(db.get_ref(), worker_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Worker {worker_id} not found")))?;

    let user = user_db::get_user_by_id(db.get_ref(), worker.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User for this worker no longer exists"))?;

    let mobile = user_db::mobile_number_for_user(db.get_ref(), worker.user_id).await?;

    let reviews = review_db::get_reviews_for_worker(db.get_ref(), worker_id, Kind::CustomerWorker)
        .await?
        .into_iter()
        .map(ReviewView::from)
        .collect();

    Ok(success(WorkerProfile {
        username: user.username,
        first: user.first_name,
        last: user.last_name,
        email: user.email,
        mobile,
        reviews,
    }))
}
