use axum::{extract::{Path, State}, response::{IntoResponse, Response}, Json};
use crate::api::dtos::requests::{AddToCartRequest, ChangeQuantityRequest};
use crate::api::dtos::responses::CartResponse;
use crate::api::extractors::auth::{AuthUser, StaffUser};
use crate::domain::models::cart::CartItem;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Upsert: a repeat add bumps the existing line's quantity instead of
/// creating a second row for the same dish.
pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<AddToCartRequest>,
) -> Result<impl IntoResponse, AppError> {
    let menu_item = state.menu_repo.find_by_id(&payload.menu_item_id).await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;

    let line = match state.cart_repo.find_by_menu_item(&user.id, &menu_item.id).await? {
        Some(existing) => {
            state.cart_repo.set_quantity(&user.id, &existing.id, existing.quantity + 1).await?
        }
        None => {
            state.cart_repo.create(&CartItem::new(user.id.clone(), &menu_item)).await?
        }
    };

    info!("Cart updated: {} x{} for user {}", line.name, line.quantity, user.id);
    Ok(Json(line))
}

pub async fn get_cart(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let items = state.cart_repo.list_by_user(&user.id).await?;
    Ok(Json(CartResponse::new(items)))
}

/// Applies a signed quantity delta; dropping to zero or below removes the
/// line entirely.
pub async fn change_quantity(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    Json(payload): Json<ChangeQuantityRequest>,
) -> Result<Response, AppError> {
    let item = state.cart_repo.find_by_id(&user.id, &item_id).await?
        .ok_or(AppError::NotFound("Cart item not found".into()))?;

    let new_quantity = item.quantity + payload.change;

    if new_quantity <= 0 {
        state.cart_repo.delete(&user.id, &item_id).await?;
        return Ok(Json(serde_json::json!({"status": "removed"})).into_response());
    }

    let updated = state.cart_repo.set_quantity(&user.id, &item_id, new_quantity).await?;
    Ok(Json(updated).into_response())
}

pub async fn remove_cart_item(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.cart_repo.delete(&user.id, &item_id).await?;
    Ok(Json(serde_json::json!({"status": "removed"})))
}

pub async fn list_all_carts(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
) -> Result<impl IntoResponse, AppError> {
    let items = state.cart_repo.list_all().await?;
    Ok(Json(items))
}
