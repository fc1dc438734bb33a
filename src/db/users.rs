use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CreateUserFromAuth};
use crate::models::profiles;

/// Find a user by their auth UUID, creating the row from JWT claims on
/// first sight (called by the auth extractor).
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_user = users::ActiveModel {
        id: Set(input.id),
        username: Set(input.username),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch the mobile number from a user's profile, if they have one.
pub async fn mobile_number_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<String>, DbErr> {
    let profile = profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    Ok(profile.map(|p| p.mobile_number))
}
