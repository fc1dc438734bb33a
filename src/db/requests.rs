use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::requests::{self, Status};
use crate::models::{professions, request_professions};

/// Insert a new request (status Open). Generic over the connection so it
/// can run inside the create-request transaction.
pub async fn insert_request<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    subject: String,
    description: String,
    range_min: i32,
    range_max: i32,
) -> Result<requests::Model, DbErr> {
    let new_request = requests::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        subject: Set(subject),
        description: Set(description),
        range_min: Set(range_min),
        range_max: Set(range_max),
        status: Set(Status::Open),
        created_at: Set(chrono::Utc::now()),
    };

    new_request.insert(db).await
}

/// Attach profession tags to a request.
pub async fn attach_professions<C: ConnectionTrait>(
    db: &C,
    request_id: Uuid,
    profession_ids: &[Uuid],
) -> Result<(), DbErr> {
    for &profession_id in profession_ids {
        let link = request_professions::ActiveModel {
            request_id: Set(request_id),
            profession_id: Set(profession_id),
        };
        link.insert(db).await?;
    }
    Ok(())
}

/// Fetch a single request by ID.
pub async fn get_request_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<requests::Model>, DbErr> {
    requests::Entity::find_by_id(id).one(db).await
}

/// Fetch all requests posted by a user.
pub async fn get_requests_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::UserId.eq(user_id))
        .all(db)
        .await
}

/// All open requests together with their profession tags, for worker
/// eligibility matching.
pub async fn open_requests_with_professions(
    db: &DatabaseConnection,
) -> Result<Vec<(requests::Model, Vec<professions::Model>)>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::Status.eq(Status::Open))
        .find_with_related(professions::Entity)
        .all(db)
        .await
}

/// Names of the profession tags on a request.
pub async fn tag_names_for_request(
    db: &DatabaseConnection,
    request: &requests::Model,
) -> Result<Vec<String>, DbErr> {
    let professions = request.find_related(professions::Entity).all(db).await?;
    Ok(professions.into_iter().map(|p| p.name).collect())
}

/// Flip a request from Open to Accepted. The update is conditional on the
/// row still being Open, so a second concurrent accept sees zero rows
/// affected instead of silently double-accepting.
pub async fn mark_accepted_if_open<C: ConnectionTrait>(
    db: &C,
    request_id: Uuid,
) -> Result<bool, DbErr> {
    let result = requests::Entity::update_many()
        .col_expr(requests::Column::Status, Expr::value(Status::Accepted))
        .filter(requests::Column::Id.eq(request_id))
        .filter(requests::Column::Status.eq(Status::Open))
        .exec(db)
        .await?;

    Ok(result.rows_affected == 1)
}

/// Update a request's status.
pub async fn set_status<C: ConnectionTrait>(
    db: &C,
    request: requests::Model,
    status: Status,
) -> Result<requests::Model, DbErr> {
    let mut active: requests::ActiveModel = request.into();
    active.status = Set(status);
    active.update(db).await
}

/// Delete a request by ID.
pub async fn delete_request(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    requests::Entity::delete_by_id(id).exec(db).await
}
