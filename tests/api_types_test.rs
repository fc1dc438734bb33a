//! Wire-format tests for the request/response DTOs.
//!
//! The JSON contract matters more than the Rust shapes: status strings are
//! uppercase, `images` defaults to empty on input, and `accepted_worker_id`
//! only appears on owner-facing request views.

use uuid::Uuid;

use workers_hub_backend::models::proposals;
use workers_hub_backend::models::requests::{CreateRequest, RequestView, Status};
use workers_hub_backend::models::reviews;

fn sample_request(status: Status) -> workers_hub_backend::models::requests::Model {
    workers_hub_backend::models::requests::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        subject: "Fix leaking sink".to_string(),
        description: "Kitchen sink drips overnight".to_string(),
        range_min: 50,
        range_max: 120,
        status,
        created_at: chrono::Utc::now(),
    }
}

#[test]
fn create_request_images_default_to_empty() {
    let input: CreateRequest = serde_json::from_str(
        r#"{
            "subject": "Fix leaking sink",
            "description": "Kitchen sink drips overnight",
            "range_min": 50,
            "range_max": 120,
            "tags": ["plumber"]
        }"#,
    )
    .expect("body without images should deserialize");

    assert!(input.images.is_empty());
    assert_eq!(input.tags, vec!["plumber"]);
}

#[test]
fn create_request_missing_required_field_is_rejected() {
    let result: Result<CreateRequest, _> = serde_json::from_str(
        r#"{"subject": "x", "range_min": 1, "range_max": 2, "tags": []}"#,
    );
    assert!(result.is_err());
}

#[test]
fn request_status_serializes_uppercase() {
    let value = serde_json::to_value(Status::Open).unwrap();
    assert_eq!(value, serde_json::json!("OPEN"));
    let value = serde_json::to_value(Status::Closed).unwrap();
    assert_eq!(value, serde_json::json!("CLOSED"));

    let value = serde_json::to_value(proposals::Status::Accepted).unwrap();
    assert_eq!(value, serde_json::json!("ACCEPTED"));

    let value = serde_json::to_value(reviews::Kind::CustomerWorker).unwrap();
    assert_eq!(value, serde_json::json!("CUSTOMER_WORKER"));
}

#[test]
fn request_view_hides_accepted_worker_unless_set() {
    let view = RequestView::new(sample_request(Status::Open), vec![], vec![]);
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("accepted_worker_id").is_none());

    let worker_id = Uuid::new_v4();
    let view = RequestView::new(sample_request(Status::Accepted), vec![], vec![])
        .with_accepted_worker(Some(worker_id));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(
        json["accepted_worker_id"],
        serde_json::json!(worker_id.to_string())
    );
    assert_eq!(json["status"], serde_json::json!("ACCEPTED"));
}

#[test]
fn request_view_carries_tags_and_images() {
    let view = RequestView::new(
        sample_request(Status::Open),
        vec!["plumber".to_string(), "electrician".to_string()],
        vec!["/images/abc.jpg".to_string()],
    );
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["tags"], serde_json::json!(["plumber", "electrician"]));
    assert_eq!(json["images"], serde_json::json!(["/images/abc.jpg"]));
    assert_eq!(json["range_min"], serde_json::json!(50));
    assert_eq!(json["range_max"], serde_json::json!(120));
}
