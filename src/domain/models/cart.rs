use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::menu::MenuItem;

/// A line in a user's cart. Name and price are snapshotted from the menu
/// item at add time, so later menu edits do not reprice an open cart.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CartItem {
    pub id: String,
    pub user_id: String,
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(user_id: String, item: &MenuItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
            created_at: Utc::now(),
        }
    }
}
