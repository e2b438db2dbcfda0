//! Integration tests for the registration and payment endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use common::{guest_body, student_body, Harness};
use fest_api::app::create_app;
use fest_core::domain::entities::Ledger;
use fest_core::services::DuplicateCheckPolicy;

const PAYLOAD_LIMIT: usize = 64 * 1024;

macro_rules! app {
    ($harness:expr) => {
        test::init_service(create_app(
            $harness.state.clone(),
            &Harness::cors(),
            PAYLOAD_LIMIT,
        ))
        .await
    };
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn test_save_student_appends_pending_row() {
    let harness = Harness::new();
    let app = app!(harness);

    let resp = test::call_service(
        &app,
        post("/api/save-student", student_body("asha@college.edu")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let rows = harness.ledger.rows(Ledger::Student);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), 9);
    assert!(row[0].ends_with('Z'));
    assert_eq!(
        &row[1..7],
        ["Asha Verma", "RA2111003010", "CSE", "2", "asha@college.edu", "9876543210"]
    );
    assert_eq!(row[7], "pending");
    assert_eq!(row[8], "");
}

#[actix_web::test]
async fn test_missing_field_is_rejected() {
    let harness = Harness::new();
    let app = app!(harness);

    let mut body = student_body("asha@college.edu");
    body["department"] = json!("   ");
    let resp = test::call_service(&app, post("/api/save-student", body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("All fields are required"));

    let resp = test::call_service(
        &app,
        post("/api/save-guest", json!({ "name": "Ravi" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.ledger.write_count(), 0);
}

#[actix_web::test]
async fn test_duplicate_in_same_ledger_conflicts_but_other_ledger_accepts() {
    let harness = Harness::new();
    let app = app!(harness);

    let first = test::call_service(
        &app,
        post("/api/save-student", student_body("asha@college.edu")).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let duplicate = test::call_service(
        &app,
        post("/api/save-student", student_body("ASHA@College.edu")).to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(duplicate).await;
    assert_eq!(body["message"], "Email already registered");

    let guest = test::call_service(
        &app,
        post("/api/save-guest", guest_body("asha@college.edu")).to_request(),
    )
    .await;
    assert_eq!(guest.status(), StatusCode::OK);

    assert_eq!(harness.ledger.rows(Ledger::Student).len(), 1);
    assert_eq!(harness.ledger.rows(Ledger::Guest).len(), 1);
    assert_eq!(harness.ledger.rows(Ledger::Guest)[0].len(), 7);
}

#[actix_web::test]
async fn test_write_failure_is_a_server_error() {
    let harness = Harness::new();
    harness.ledger.set_fail_writes(true);
    let app = app!(harness);

    let resp = test::call_service(
        &app,
        post("/api/save-guest", guest_body("ravi@vit.ac.in")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_duplicate_check_failure_follows_policy() {
    let open = Harness::new();
    open.ledger.set_fail_reads(true);
    let app = app!(open);
    let resp = test::call_service(
        &app,
        post("/api/save-student", student_body("asha@college.edu")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let closed = Harness::with_policy(DuplicateCheckPolicy::FailClosed);
    closed.ledger.set_fail_reads(true);
    let app = app!(closed);
    let resp = test::call_service(
        &app,
        post("/api/save-student", student_body("asha@college.edu")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(closed.ledger.rows(Ledger::Student).is_empty());
}

#[actix_web::test]
async fn test_payment_update_writes_student_row() {
    let harness = Harness::new();
    let app = app!(harness);

    test::call_service(
        &app,
        post("/api/save-student", student_body("asha@college.edu")).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        post(
            "/api/update-payment-status",
            json!({
                "email": "Asha@College.edu",
                "transactionId": "UPI123456",
                "paymentStatus": "paid"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let row = &harness.ledger.rows(Ledger::Student)[0];
    assert_eq!(row[7], "paid");
    assert_eq!(row[8], "UPI123456");
}

#[actix_web::test]
async fn test_payment_update_for_guest_is_a_no_op_success() {
    let harness = Harness::new();
    let app = app!(harness);

    test::call_service(
        &app,
        post("/api/save-guest", guest_body("ravi@vit.ac.in")).to_request(),
    )
    .await;
    let writes_before = harness.ledger.write_count();

    let resp = test::call_service(
        &app,
        post(
            "/api/update-payment-status",
            json!({
                "email": "ravi@vit.ac.in",
                "transactionId": "UPI1",
                "paymentStatus": "paid"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(harness.ledger.write_count(), writes_before);
}

#[actix_web::test]
async fn test_payment_update_for_unknown_email_fails() {
    let harness = Harness::new();
    let app = app!(harness);

    let resp = test::call_service(
        &app,
        post(
            "/api/update-payment-status",
            json!({
                "email": "ghost@college.edu",
                "transactionId": "UPI1",
                "paymentStatus": "paid"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to update payment status");

    let resp = test::call_service(
        &app,
        post("/api/update-payment-status", json!({ "email": "a@b.co" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_and_unknown_routes() {
    let harness = Harness::new();
    let app = app!(harness);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_payment_update_succeeds_when_ledger_is_offline() {
    let harness = Harness::new();
    harness.ledger.set_not_persisted(true);
    let app = app!(harness);

    let resp = test::call_service(
        &app,
        post(
            "/api/update-payment-status",
            json!({
                "email": "asha@college.edu",
                "transactionId": "TXN123",
                "paymentStatus": "paid"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}
