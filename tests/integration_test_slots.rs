mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, CUSTOMER_TOKEN};
use serde_json::json;

#[tokio::test]
async fn test_full_day_of_open_slots() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/api/v1/reservations/slots?date=2031-05-20", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["date"], "2031-05-20");

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 22);

    assert_eq!(slots[0]["time"], "11:00:00");
    assert_eq!(slots[21]["time"], "21:30:00");

    for slot in slots {
        assert_eq!(slot["booked_tables"], 0);
        assert_eq!(slot["available"], true);
    }
}

#[tokio::test]
async fn test_booking_counts_against_its_exact_slot_only() {
    let app = TestApp::new().await;

    // 20 guests -> 4 tables at 18:00
    let res = app.request(
        "POST",
        "/api/v1/reservations",
        Some(CUSTOMER_TOKEN),
        Some(json!({"date": "2031-05-20", "time": "18:00", "guests": 20})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", "/api/v1/reservations/slots?date=2031-05-20", None, None).await;
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    let six_pm = slots.iter().find(|s| s["time"] == "18:00:00").unwrap();
    assert_eq!(six_pm["booked_tables"], 4);
    assert_eq!(six_pm["available"], true);

    let half_past = slots.iter().find(|s| s["time"] == "18:30:00").unwrap();
    assert_eq!(half_past["booked_tables"], 0);

    // A different date is untouched
    let res = app.request("GET", "/api/v1/reservations/slots?date=2031-05-21", None, None).await;
    let body = parse_body(res).await;
    for slot in body["slots"].as_array().unwrap() {
        assert_eq!(slot["booked_tables"], 0);
    }
}

#[tokio::test]
async fn test_slots_rejects_malformed_date() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/api/v1/reservations/slots?date=not-a-date", None, None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.request("GET", "/api/v1/reservations/slots?date=20-05-2031", None, None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slot_listing_is_stable_across_calls() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/v1/reservations",
        Some(CUSTOMER_TOKEN),
        Some(json!({"date": "2031-05-20", "time": "12:30", "guests": 9})),
    ).await;

    let first = parse_body(app.request("GET", "/api/v1/reservations/slots?date=2031-05-20", None, None).await).await;
    let second = parse_body(app.request("GET", "/api/v1/reservations/slots?date=2031-05-20", None, None).await).await;
    assert_eq!(first, second);
}
