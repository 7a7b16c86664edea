use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateMenuItemRequest, MenuQuery, UpdateMenuItemRequest};
use crate::api::extractors::auth::StaffUser;
use crate::domain::models::menu::{MenuItem, NewMenuItemParams};
use crate::domain::ports::MenuFilter;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_menu(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MenuQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = MenuFilter {
        category: query.category,
        dietary: query.dietary,
        search: query.q,
    };
    let items = state.menu_repo.list(&filter).await?;
    Ok(Json(items))
}

pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.menu_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;
    Ok(Json(item))
}

pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Json(payload): Json<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.price <= 0.0 {
        return Err(AppError::Validation("Price must be positive".into()));
    }

    let item = MenuItem::new(NewMenuItemParams {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image: payload.image,
        category: payload.category,
        dietary: payload.dietary,
    });

    let created = state.menu_repo.create(&item).await?;
    info!("Menu item created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn update_menu_item(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut item = state.menu_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;

    if let Some(name) = payload.name { item.name = name; }
    if let Some(description) = payload.description { item.description = Some(description); }
    if let Some(price) = payload.price {
        if price <= 0.0 {
            return Err(AppError::Validation("Price must be positive".into()));
        }
        item.price = price;
    }
    if let Some(image) = payload.image { item.image = Some(image); }
    if let Some(category) = payload.category { item.category = category; }
    if let Some(dietary) = payload.dietary {
        item.dietary = Some(serde_json::to_string(&dietary).unwrap_or_else(|_| "[]".to_string()));
    }

    let updated = state.menu_repo.update(&item).await?;
    info!("Menu item updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_menu_item(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.menu_repo.delete(&item_id).await?;
    info!("Menu item deleted: {}", item_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
