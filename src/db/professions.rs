use sea_orm::*;

use crate::models::professions;

/// Fetch the approved professions matching the given names.
///
/// Unknown or unapproved names are simply absent from the result; the
/// caller decides whether that is an error.
pub async fn find_approved_by_names(
    db: &DatabaseConnection,
    names: &[String],
) -> Result<Vec<professions::Model>, DbErr> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    professions::Entity::find()
        .filter(professions::Column::Name.is_in(names.iter().cloned()))
        .filter(professions::Column::Approved.eq(true))
        .all(db)
        .await
}
