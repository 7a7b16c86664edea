use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::cart::CartItem;

/// One ordered line item. A checkout produces one row per cart line, all
/// sharing the same order_date.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    pub order_date: DateTime<Utc>,
    pub delivered: bool,
}

impl Order {
    pub fn from_cart_item(item: &CartItem, order_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: item.user_id.clone(),
            item_id: item.menu_item_id.clone(),
            item_name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            order_date,
            delivered: false,
        }
    }
}
