use sea_orm::*;
use uuid::Uuid;

use crate::models::images;

/// Insert an image row for a request. Runs inside the create-request
/// transaction.
pub async fn insert_image<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    request_id: Uuid,
    url: String,
) -> Result<images::Model, DbErr> {
    let new_image = images::ActiveModel {
        id: Set(id),
        request_id: Set(request_id),
        url: Set(url),
        created_at: Set(chrono::Utc::now()),
    };

    new_image.insert(db).await
}

/// Public urls of the images attached to a request.
pub async fn urls_for_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<String>, DbErr> {
    let rows = images::Entity::find()
        .filter(images::Column::RequestId.eq(request_id))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|i| i.url).collect())
}
