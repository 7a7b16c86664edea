mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, CUSTOMER2_TOKEN, CUSTOMER_TOKEN, STAFF_TOKEN};
use serde_json::json;

async fn seed_menu_item(app: &TestApp, name: &str, price: f64) -> String {
    let res = app.request(
        "POST",
        "/api/v1/menu",
        Some(STAFF_TOKEN),
        Some(json!({"name": name, "price": price, "category": "Mains"})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn add_to_cart(app: &TestApp, token: &str, menu_item_id: &str) -> serde_json::Value {
    let res = app.request(
        "POST",
        "/api/v1/cart",
        Some(token),
        Some(json!({"menu_item_id": menu_item_id})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_cart_requires_authentication() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/api/v1/cart", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.request("POST", "/api/v1/cart", None, Some(json!({"menu_item_id": "x"}))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_adding_unknown_menu_item_fails() {
    let app = TestApp::new().await;

    let res = app.request(
        "POST",
        "/api/v1/cart",
        Some(CUSTOMER_TOKEN),
        Some(json!({"menu_item_id": "no-such-item"})),
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeat_add_bumps_quantity() {
    let app = TestApp::new().await;
    let item_id = seed_menu_item(&app, "Margherita", 11.0).await;

    let line = add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    assert_eq!(line["quantity"], 1);
    assert_eq!(line["name"], "Margherita");

    let line = add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    assert_eq!(line["quantity"], 2);

    let cart = parse_body(app.request("GET", "/api/v1/cart", Some(CUSTOMER_TOKEN), None).await).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["total"], 22.0);
}

#[tokio::test]
async fn test_quantity_change_and_removal() {
    let app = TestApp::new().await;
    let item_id = seed_menu_item(&app, "Bruschetta", 6.5).await;

    let line = add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    let line_id = line["id"].as_str().unwrap().to_string();

    let res = app.request(
        "PUT",
        &format!("/api/v1/cart/{}", line_id),
        Some(CUSTOMER_TOKEN),
        Some(json!({"change": -1})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["quantity"], 2);

    // A delta that lands at or below zero removes the line
    let res = app.request(
        "PUT",
        &format!("/api/v1/cart/{}", line_id),
        Some(CUSTOMER_TOKEN),
        Some(json!({"change": -5})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "removed");

    let cart = parse_body(app.request("GET", "/api/v1/cart", Some(CUSTOMER_TOKEN), None).await).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"], 0.0);
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let app = TestApp::new().await;
    let item_id = seed_menu_item(&app, "Margherita", 11.0).await;

    let line = add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    let line_id = line["id"].as_str().unwrap().to_string();

    let other = parse_body(app.request("GET", "/api/v1/cart", Some(CUSTOMER2_TOKEN), None).await).await;
    assert!(other["items"].as_array().unwrap().is_empty());

    // Another customer cannot touch the line
    let res = app.request(
        "DELETE",
        &format!("/api/v1/cart/{}", line_id),
        Some(CUSTOMER2_TOKEN),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let mine = parse_body(app.request("GET", "/api/v1/cart", Some(CUSTOMER_TOKEN), None).await).await;
    assert_eq!(mine["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_with_empty_cart_fails() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/orders", Some(CUSTOMER_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Your cart is empty");
}

#[tokio::test]
async fn test_checkout_snapshots_cart_into_orders() {
    let app = TestApp::new().await;
    let pizza = seed_menu_item(&app, "Margherita", 11.0).await;
    let starter = seed_menu_item(&app, "Bruschetta", 6.5).await;

    add_to_cart(&app, CUSTOMER_TOKEN, &pizza).await;
    add_to_cart(&app, CUSTOMER_TOKEN, &pizza).await;
    add_to_cart(&app, CUSTOMER_TOKEN, &starter).await;

    let res = app.request("POST", "/api/v1/orders", Some(CUSTOMER_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let orders = parse_body(res).await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);

    let pizza_line = orders.iter().find(|o| o["item_name"] == "Margherita").unwrap();
    assert_eq!(pizza_line["quantity"], 2);
    assert_eq!(pizza_line["price"], 11.0);
    assert_eq!(pizza_line["delivered"], false);

    // Every line of one checkout carries the same order date
    assert_eq!(orders[0]["order_date"], orders[1]["order_date"]);

    // Checkout empties the cart
    let cart = parse_body(app.request("GET", "/api/v1/cart", Some(CUSTOMER_TOKEN), None).await).await;
    assert!(cart["items"].as_array().unwrap().is_empty());

    let mine = parse_body(app.request("GET", "/api/v1/orders", Some(CUSTOMER_TOKEN), None).await).await;
    assert_eq!(mine.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_staff_order_views_and_delivery() {
    let app = TestApp::new().await;
    let item_id = seed_menu_item(&app, "Margherita", 11.0).await;

    add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    app.request("POST", "/api/v1/orders", Some(CUSTOMER_TOKEN), None).await;
    add_to_cart(&app, CUSTOMER2_TOKEN, &item_id).await;
    app.request("POST", "/api/v1/orders", Some(CUSTOMER2_TOKEN), None).await;

    // Customers may not use the admin surface
    let res = app.request("GET", "/api/v1/admin/orders", Some(CUSTOMER_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let all = parse_body(app.request("GET", "/api/v1/admin/orders", Some(STAFF_TOKEN), None).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    let first_id = all.as_array().unwrap()[0]["id"].as_str().unwrap().to_string();

    let res = app.request(
        "POST",
        &format!("/api/v1/admin/orders/{}/deliver", first_id),
        Some(STAFF_TOKEN),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["delivered"], true);

    let pending = parse_body(
        app.request("GET", "/api/v1/admin/orders?status=pending", Some(STAFF_TOKEN), None).await,
    ).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let delivered = parse_body(
        app.request("GET", "/api/v1/admin/orders?status=delivered", Some(STAFF_TOKEN), None).await,
    ).await;
    assert_eq!(delivered.as_array().unwrap().len(), 1);
    assert_eq!(delivered.as_array().unwrap()[0]["id"], first_id.as_str());

    let res = app.request("GET", "/api/v1/admin/orders?status=shipped", Some(STAFF_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.request(
        "POST",
        "/api/v1/admin/orders/no-such-order/deliver",
        Some(STAFF_TOKEN),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_staff_can_inspect_open_carts() {
    let app = TestApp::new().await;
    let item_id = seed_menu_item(&app, "Margherita", 11.0).await;
    add_to_cart(&app, CUSTOMER_TOKEN, &item_id).await;
    add_to_cart(&app, CUSTOMER2_TOKEN, &item_id).await;

    let res = app.request("GET", "/api/v1/admin/carts", Some(CUSTOMER_TOKEN), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let carts = parse_body(app.request("GET", "/api/v1/admin/carts", Some(STAFF_TOKEN), None).await).await;
    assert_eq!(carts.as_array().unwrap().len(), 2);
}
