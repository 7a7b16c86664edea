use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::OrdersQuery;
use crate::api::extractors::auth::{AuthUser, StaffUser};
use crate::domain::models::order::Order;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Checkout: snapshot the caller's cart into order rows (one per line, all
/// stamped with the same order_date), then empty the cart.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let cart = state.cart_repo.list_by_user(&user.id).await?;

    if cart.is_empty() {
        return Err(AppError::Validation("Your cart is empty".into()));
    }

    let order_date = Utc::now();
    let orders: Vec<Order> = cart.iter().map(|line| Order::from_cart_item(line, order_date)).collect();

    let created = state.order_repo.create_many(&orders).await?;
    state.cart_repo.clear_user(&user.id).await?;

    info!("Order placed: {} lines for user {}", created.len(), user.id);
    Ok(Json(created))
}

pub async fn list_my_orders(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_repo.list_by_user(&user.id).await?;
    Ok(Json(orders))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let delivered = match query.status.as_deref() {
        Some("delivered") => Some(true),
        Some("pending") => Some(false),
        None => None,
        Some(other) => {
            return Err(AppError::Validation(format!(
                "Unknown status filter: {} (expected delivered or pending)",
                other
            )))
        }
    };

    let orders = state.order_repo.list(delivered).await?;
    Ok(Json(orders))
}

pub async fn deliver_order(
    State(state): State<Arc<AppState>>,
    StaffUser(staff): StaffUser,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.order_repo.mark_delivered(&order_id).await?;
    info!("Order {} marked delivered by {}", order.id, staff.id);
    Ok(Json(order))
}
