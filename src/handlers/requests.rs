use std::path::{Path, PathBuf};

use actix_web::{HttpResponse, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::{AuthenticatedUser, AuthenticatedWorker};
use crate::db::images as image_db;
use crate::db::professions as profession_db;
use crate::db::proposals as proposal_db;
use crate::db::requests as request_db;
use crate::db::workers as worker_db;
use crate::error::ApiError;
use crate::handlers::{created, success};
use crate::models::requests::{CreateRequest, RequestView, Status};

/// Directory where uploaded images land, stored in Actix app data.
/// actix-files serves the same directory at `/images`.
#[derive(Clone)]
pub struct ImageDir(pub PathBuf);

/// GET /api/requests — the caller's own requests with tags, image urls and
/// the accepted worker (if a proposal was accepted).
pub async fn get_requests(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let requests = request_db::get_requests_by_user_id(db.get_ref(), user.0.id).await?;

    let mut views = Vec::with_capacity(requests.len());
    for request in requests {
        let tags = request_db::tag_names_for_request(db.get_ref(), &request).await?;
        let images = image_db::urls_for_request(db.get_ref(), request.id).await?;
        let accepted = proposal_db::accepted_for_request(db.get_ref(), request.id).await?;

        views.push(
            RequestView::new(request, tags, images)
                .with_accepted_worker(accepted.map(|p| p.worker_id)),
        );
    }

    Ok(success(views))
}

/// POST /api/requests — post a new job.
///
/// Validates the price range, resolves tags to approved professions,
/// requires at least one worker covering the full tag set, then persists
/// the request, its tags and its images in one transaction. Image files
/// written before a failure are removed again.
pub async fn create_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    image_dir: web::Data<ImageDir>,
    body: web::Json<CreateRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    if input.range_min > input.range_max {
        return Err(ApiError::validation(
            "Minimum range is bigger than maximum range.",
        ));
    }

    // Every tag must name an approved profession.
    let professions = profession_db::find_approved_by_names(db.get_ref(), &input.tags).await?;
    if let Some(unknown) = input
        .tags
        .iter()
        .find(|tag| !professions.iter().any(|p| &p.name == *tag))
    {
        return Err(ApiError::not_found(format!(
            "Unknown or unapproved profession: {unknown}"
        )));
    }

    let profession_ids: Vec<Uuid> = professions.iter().map(|p| p.id).collect();

    if !worker_db::any_worker_covers(db.get_ref(), &profession_ids).await? {
        return Err(ApiError::not_found(
            "No available workers for specified professions",
        ));
    }

    // Decode image payloads up front so a bad upload fails before any write.
    let mut payloads = Vec::with_capacity(input.images.len());
    for (index, encoded) in input.images.iter().enumerate() {
        let bytes = BASE64.decode(encoded.as_bytes()).map_err(|e| {
            ApiError::validation(format!("Image {index} is not valid base64: {e}"))
        })?;
        payloads.push(bytes);
    }

    let txn = db.begin().await?;

    let request = request_db::insert_request(
        &txn,
        user.0.id,
        input.subject,
        input.description,
        input.range_min,
        input.range_max,
    )
    .await?;
    request_db::attach_professions(&txn, request.id, &profession_ids).await?;

    let mut written = Vec::new();
    if let Err(err) = store_images(&txn, &image_dir.0, request.id, &payloads, &mut written).await {
        remove_files(&written).await;
        return Err(err);
    }

    if let Err(err) = txn.commit().await {
        remove_files(&written).await;
        return Err(err.into());
    }

    tracing::info!(request_id = %request.id, "request created");
    Ok(created(request.subject))
}

/// DELETE /api/requests/{request_id} — cancel one of the caller's requests.
/// Only open requests can be cancelled. Uploaded image files go with the
/// request; the cascade only covers the rows.
pub async fn cancel_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    image_dir: web::Data<ImageDir>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let request_id = path.into_inner();

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Request {request_id} not found")))?;

    if request.user_id != user.0.id {
        return Err(ApiError::forbidden("You can only cancel your own requests"));
    }

    if request.status != Status::Open {
        return Err(ApiError::conflict(
            "Cannot cancel once a bidder has been accepted.",
        ));
    }

    let urls = image_db::urls_for_request(db.get_ref(), request_id).await?;

    request_db::delete_request(db.get_ref(), request_id).await?;
    remove_files(&paths_for_urls(&image_dir.0, &urls)).await;

    Ok(success(request.subject))
}

/// GET /api/worker/requests — open requests whose full tag set is covered
/// by the calling worker's professions.
pub async fn get_eligible_requests(
    worker: AuthenticatedWorker,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let held = worker_db::profession_ids_for_worker(db.get_ref(), worker.worker.id).await?;
    let open = request_db::open_requests_with_professions(db.get_ref()).await?;

    let mut views = Vec::new();
    for (request, professions) in open {
        let required: Vec<Uuid> = professions.iter().map(|p| p.id).collect();
        if !worker_db::covers(&held, &required) {
            continue;
        }

        let tags = professions.into_iter().map(|p| p.name).collect();
        let images = image_db::urls_for_request(db.get_ref(), request.id).await?;
        views.push(RequestView::new(request, tags, images));
    }

    Ok(success(views))
}

async fn store_images<C: sea_orm::ConnectionTrait>(
    txn: &C,
    dir: &Path,
    request_id: Uuid,
    payloads: &[Vec<u8>],
    written: &mut Vec<PathBuf>,
) -> Result<(), ApiError> {
    for bytes in payloads {
        let image_id = Uuid::new_v4();
        let file_name = format!("{image_id}.jpg");
        let path = dir.join(&file_name);

        tokio::fs::write(&path, bytes).await?;
        written.push(path);

        image_db::insert_image(txn, image_id, request_id, format!("/images/{file_name}")).await?;
    }
    Ok(())
}

/// Map public `/images/<name>` urls back to their files under the image dir.
fn paths_for_urls(dir: &Path, urls: &[String]) -> Vec<PathBuf> {
    urls.iter()
        .filter_map(|url| url.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .map(|name| dir.join(name))
        .collect()
}

async fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove orphaned image");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_mapping_strips_the_public_prefix() {
        let dir = Path::new("/srv/uploads");
        let urls = vec![
            "/images/abc.jpg".to_string(),
            "/images/def.jpg".to_string(),
        ];

        let paths = paths_for_urls(dir, &urls);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/srv/uploads/abc.jpg"),
                PathBuf::from("/srv/uploads/def.jpg"),
            ]
        );
    }

    #[test]
    fn url_mapping_skips_malformed_urls() {
        let dir = Path::new("/srv/uploads");
        let urls = vec!["/images/".to_string()];
        assert!(paths_for_urls(dir, &urls).is_empty());
    }
}
