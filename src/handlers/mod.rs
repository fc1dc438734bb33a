pub mod auth;
pub mod proposals;
pub mod requests;
pub mod reviews;
pub mod workers;

use actix_web::{HttpResponse, web};
use serde::Serialize;

/// 200 response in the standard wire envelope.
pub(crate) fn success(payload: impl Serialize) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": payload,
    }))
}

/// 201 response in the standard wire envelope.
pub(crate) fn created(payload: impl Serialize) -> HttpResponse {
    HttpResponse::Created().json(serde_json::json!({
        "status": "success",
        "message": payload,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes ──
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));

    // ── Customer request routes ──
    cfg.service(
        web::resource("/requests")
            .route(web::get().to(requests::get_requests))
            .route(web::post().to(requests::create_request)),
    );
    cfg.service(
        web::resource("/requests/{request_id}")
            .route(web::delete().to(requests::cancel_request)),
    );
    cfg.service(
        web::resource("/requests/{request_id}/proposals")
            .route(web::get().to(proposals::get_proposals_for_request))
            .route(web::post().to(proposals::submit_proposal)),
    );
    cfg.service(
        web::resource("/requests/{request_id}/proposals/{proposal_id}/accept")
            .route(web::post().to(proposals::accept_proposal)),
    );
    cfg.service(
        web::resource("/requests/{request_id}/reviews")
            .route(web::post().to(reviews::write_review)),
    );

    // ── Review + worker-profile routes ──
    cfg.service(web::resource("/reviews").route(web::get().to(reviews::get_received_reviews)));
    cfg.service(
        web::resource("/workers/{worker_id}").route(web::get().to(workers::get_worker_profile)),
    );

    // ── Worker-side routes (require a worker registration) ──
    cfg.service(
        web::resource("/worker/requests")
            .route(web::get().to(requests::get_eligible_requests)),
    );
    cfg.service(
        web::resource("/worker/proposals").route(web::get().to(proposals::get_own_proposals)),
    );
    cfg.service(
        web::resource("/proposals/{proposal_id}")
            .route(web::delete().to(proposals::cancel_proposal)),
    );
}
