use sea_orm::*;
use uuid::Uuid;

use crate::models::reviews::{self, Kind};

/// Insert a review. Runs inside the write-review transaction.
pub async fn insert_review<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    worker_id: Uuid,
    rating: i32,
    message: String,
    kind: Kind,
) -> Result<reviews::Model, DbErr> {
    let new_review = reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        worker_id: Set(worker_id),
        rating: Set(rating),
        message: Set(message),
        kind: Set(kind),
        created_at: Set(chrono::Utc::now()),
    };

    new_review.insert(db).await
}

/// Reviews a worker has received, filtered by direction.
pub async fn get_reviews_for_worker(
    db: &DatabaseConnection,
    worker_id: Uuid,
    kind: Kind,
) -> Result<Vec<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::WorkerId.eq(worker_id))
        .filter(reviews::Column::Kind.eq(kind))
        .all(db)
        .await
}

/// Reviews tied to a user, filtered by direction (worker→customer reviews
/// the user received as a customer).
pub async fn get_reviews_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    kind: Kind,
) -> Result<Vec<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::UserId.eq(user_id))
        .filter(reviews::Column::Kind.eq(kind))
        .all(db)
        .await
}
