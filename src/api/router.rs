use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{cart, contact, health, menu, order, reservation};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Menu
        .route("/api/v1/menu", get(menu::list_menu).post(menu::create_menu_item))
        .route("/api/v1/menu/{item_id}", get(menu::get_menu_item).put(menu::update_menu_item).delete(menu::delete_menu_item))

        // Cart
        .route("/api/v1/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/api/v1/cart/{item_id}", put(cart::change_quantity).delete(cart::remove_cart_item))

        // Orders
        .route("/api/v1/orders", get(order::list_my_orders).post(order::checkout))

        // Reservations
        .route("/api/v1/reservations/slots", get(reservation::get_slots))
        .route("/api/v1/reservations", get(reservation::list_my_reservations).post(reservation::create_reservation))
        .route("/api/v1/reservations/{reservation_id}", delete(reservation::delete_reservation))

        // Contact
        .route("/api/v1/contact", post(contact::submit_message))

        // Staff views
        .route("/api/v1/admin/carts", get(cart::list_all_carts))
        .route("/api/v1/admin/orders", get(order::list_orders))
        .route("/api/v1/admin/orders/{order_id}/deliver", post(order::deliver_order))
        .route("/api/v1/admin/reservations", get(reservation::list_all_reservations))
        .route("/api/v1/admin/reservations/{reservation_id}", delete(reservation::admin_delete_reservation))
        .route("/api/v1/admin/contact", get(contact::list_messages))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
