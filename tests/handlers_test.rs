//! Handler-level tests over a mocked database.
//!
//! Exercises the business gates without a live Postgres: range validation,
//! the conditional accept (including the losing side of a racing accept),
//! delete gating for requests and proposals, and review submission closing
//! the request.
//!
//! Run with: `cargo test --test handlers_test`

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use actix_web::web;
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

use workers_hub_backend::auth::middleware::{AuthenticatedUser, AuthenticatedWorker};
use workers_hub_backend::handlers::requests::ImageDir;
use workers_hub_backend::handlers::{proposals, requests, reviews};
use workers_hub_backend::models;
use workers_hub_backend::models::proposals::Status as ProposalStatus;
use workers_hub_backend::models::requests::{CreateRequest, Status as RequestStatus};

fn user(id: Uuid) -> models::users::Model {
    models::users::Model {
        id,
        username: "alice".to_string(),
        first_name: Some("Alice".to_string()),
        last_name: Some("Smith".to_string()),
        email: "alice@example.com".to_string(),
        created_at: Utc::now(),
    }
}

fn request(id: Uuid, user_id: Uuid, status: RequestStatus) -> models::requests::Model {
    models::requests::Model {
        id,
        user_id,
        subject: "Fix leaking sink".to_string(),
        description: "Kitchen sink drips overnight".to_string(),
        range_min: 50,
        range_max: 120,
        status,
        created_at: Utc::now(),
    }
}

fn proposal(
    id: Uuid,
    request_id: Uuid,
    worker_id: Uuid,
    status: ProposalStatus,
) -> models::proposals::Model {
    models::proposals::Model {
        id,
        request_id,
        worker_id,
        cost: 80,
        message: "Can come by tomorrow".to_string(),
        status,
        created_at: Utc::now(),
    }
}

fn worker(id: Uuid, user_id: Uuid) -> models::workers::Model {
    models::workers::Model {
        id,
        user_id,
        created_at: Utc::now(),
    }
}

fn image(request_id: Uuid, url: &str) -> models::images::Model {
    models::images::Model {
        id: Uuid::new_v4(),
        request_id,
        url: url.to_string(),
        created_at: Utc::now(),
    }
}

fn image_dir() -> web::Data<ImageDir> {
    web::Data::new(ImageDir(std::env::temp_dir()))
}

#[actix_web::test]
async fn create_request_rejects_inverted_range() {
    // The range check fires before any database access.
    let db: DatabaseConnection = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let body = CreateRequest {
        subject: "Fix leaking sink".to_string(),
        description: "Kitchen sink drips overnight".to_string(),
        range_min: 120,
        range_max: 50,
        tags: vec!["plumber".to_string()],
        images: vec![],
    };

    let err = requests::create_request(
        AuthenticatedUser(user(Uuid::new_v4())),
        web::Data::new(db),
        image_dir(),
        web::Json(body),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn accept_marks_proposal_and_request_accepted() {
    let owner_id = Uuid::new_v4();
    let bidder_user_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();
    let proposal_id = Uuid::new_v4();
    let worker_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Open)]])
        .append_query_results([vec![proposal(
            proposal_id,
            request_id,
            worker_id,
            ProposalStatus::Open,
        )]])
        .append_query_results([vec![worker(worker_id, bidder_user_id)]])
        // conditional request flip: one row moved from OPEN to ACCEPTED
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![proposal(
            proposal_id,
            request_id,
            worker_id,
            ProposalStatus::Accepted,
        )]])
        .into_connection();

    let resp = proposals::accept_proposal(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        web::Path::from((request_id, proposal_id)),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn accept_losing_a_race_is_a_conflict() {
    // The request row still reads OPEN when fetched, but by the time the
    // transaction runs the conditional flip another accept has won: zero
    // rows affected must surface as 409, not a second acceptance.
    let owner_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();
    let proposal_id = Uuid::new_v4();
    let worker_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Open)]])
        .append_query_results([vec![proposal(
            proposal_id,
            request_id,
            worker_id,
            ProposalStatus::Open,
        )]])
        .append_query_results([vec![worker(worker_id, Uuid::new_v4())]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let err = proposals::accept_proposal(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        web::Path::from((request_id, proposal_id)),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn cancel_request_is_rejected_once_accepted() {
    let owner_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Accepted)]])
        .into_connection();

    let err = requests::cancel_request(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        image_dir(),
        web::Path::from(request_id),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn cancel_request_removes_uploaded_files() {
    let owner_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();

    let dir = std::env::temp_dir().join(format!("wh-cancel-{request_id}"));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("upload.jpg");
    std::fs::write(&file, b"jpeg bytes").unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Open)]])
        .append_query_results([vec![image(request_id, "/images/upload.jpg")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let resp = requests::cancel_request(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        web::Data::new(ImageDir(dir.clone())),
        web::Path::from(request_id),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!file.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[actix_web::test]
async fn cancel_proposal_is_rejected_once_accepted() {
    let worker_user_id = Uuid::new_v4();
    let worker_id = Uuid::new_v4();
    let proposal_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![proposal(
            proposal_id,
            Uuid::new_v4(),
            worker_id,
            ProposalStatus::Accepted,
        )]])
        .into_connection();

    let err = proposals::cancel_proposal(
        AuthenticatedWorker {
            worker: worker(worker_id, worker_user_id),
            user: user(worker_user_id),
        },
        web::Data::new(db),
        web::Path::from(proposal_id),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn review_closes_the_request() {
    let owner_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();
    let worker_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Accepted)]])
        .append_query_results([vec![proposal(
            Uuid::new_v4(),
            request_id,
            worker_id,
            ProposalStatus::Accepted,
        )]])
        // request update inside the transaction returns the closed row
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Closed)]])
        .append_query_results([vec![models::reviews::Model {
            id: Uuid::new_v4(),
            user_id: owner_id,
            worker_id,
            rating: 5,
            message: "Quick and tidy".to_string(),
            kind: models::reviews::Kind::CustomerWorker,
            created_at: Utc::now(),
        }]])
        .into_connection();

    let resp = reviews::write_review(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        web::Path::from(request_id),
        web::Json(models::reviews::CreateReview {
            rating: 5,
            message: "Quick and tidy".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn review_without_accepted_proposal_is_a_conflict() {
    let owner_id = Uuid::new_v4();
    let request_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request(request_id, owner_id, RequestStatus::Open)]])
        .append_query_results([Vec::<models::proposals::Model>::new()])
        .into_connection();

    let err = reviews::write_review(
        AuthenticatedUser(user(owner_id)),
        web::Data::new(db),
        web::Path::from(request_id),
        web::Json(models::reviews::CreateReview {
            rating: 5,
            message: "Quick and tidy".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}
