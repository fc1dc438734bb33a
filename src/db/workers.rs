use std::collections::HashSet;

use sea_orm::*;
use uuid::Uuid;

use crate::models::{professions, workers};

/// Fetch a single worker by ID.
pub async fn get_worker_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<workers::Model>, DbErr> {
    workers::Entity::find_by_id(id).one(db).await
}

/// Fetch the worker row for a user, if the user is registered as one.
pub async fn get_worker_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<workers::Model>, DbErr> {
    workers::Entity::find()
        .filter(workers::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Ids of the professions a worker holds.
pub async fn profession_ids_for_worker(
    db: &DatabaseConnection,
    worker_id: Uuid,
) -> Result<HashSet<Uuid>, DbErr> {
    let worker = workers::Entity::find_by_id(worker_id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Worker not found".to_string()))?;

    let professions = worker
        .find_related(professions::Entity)
        .all(db)
        .await?;

    Ok(professions.into_iter().map(|p| p.id).collect())
}

/// All workers together with the ids of their professions.
pub async fn all_workers_with_professions(
    db: &DatabaseConnection,
) -> Result<Vec<(workers::Model, HashSet<Uuid>)>, DbErr> {
    let rows = workers::Entity::find()
        .find_with_related(professions::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(worker, profs)| (worker, profs.into_iter().map(|p| p.id).collect()))
        .collect())
}

/// Whether a worker's profession set covers every required profession.
pub fn covers(worker_professions: &HashSet<Uuid>, required: &[Uuid]) -> bool {
    required.iter().all(|id| worker_professions.contains(id))
}

/// Whether any worker holds the full set of required professions.
pub async fn any_worker_covers(
    db: &DatabaseConnection,
    required: &[Uuid],
) -> Result<bool, DbErr> {
    let workers = all_workers_with_professions(db).await?;
    Ok(workers.iter().any(|(_, held)| covers(held, required)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[Uuid]) -> HashSet<Uuid> {
        ids.iter().copied().collect()
    }

    #[test]
    fn covers_requires_full_subset() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        assert!(covers(&set(&[a, b, c]), &[a, b]));
        assert!(covers(&set(&[a, b]), &[a, b]));
        assert!(!covers(&set(&[a]), &[a, b]));
        assert!(!covers(&set(&[]), &[a]));
    }

    #[test]
    fn empty_requirement_matches_any_worker() {
        let a = Uuid::new_v4();
        assert!(covers(&set(&[a]), &[]));
        assert!(covers(&set(&[]), &[]));
    }
}
