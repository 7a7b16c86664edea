mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, CUSTOMER_TOKEN, STAFF_TOKEN};
use serde_json::json;

#[tokio::test]
async fn test_contact_requires_authentication() {
    let app = TestApp::new().await;

    let res = app.request(
        "POST",
        "/api/v1/contact",
        None,
        Some(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})),
    ).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let app = TestApp::new().await;

    for payload in [
        json!({"name": "", "email": "ada@example.com", "message": "Hello"}),
        json!({"name": "Ada", "email": "   ", "message": "Hello"}),
        json!({"name": "Ada", "email": "ada@example.com", "message": ""}),
    ] {
        let res = app.request("POST", "/api/v1/contact", Some(CUSTOMER_TOKEN), Some(payload)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_submit_and_staff_review() {
    let app = TestApp::new().await;

    let res = app.request(
        "POST",
        "/api/v1/contact",
        Some(CUSTOMER_TOKEN),
        Some(json!({"name": "Ada", "email": "ada@example.com", "message": "Do you cater?"})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let created = parse_body(res).await;
    assert_eq!(created["user_id"], "user-1");
    assert_eq!(created["message"], "Do you cater?");

    // The inbox is staff-only
    let res = app.request("GET", "/api/v1/admin/contact", Some(CUSTOMER_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let messages = parse_body(app.request("GET", "/api/v1/admin/contact", Some(STAFF_TOKEN), None).await).await;
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["email"], "ada@example.com");
}
