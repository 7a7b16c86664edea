use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::cart::CartItem;
use crate::domain::services::availability::SlotAvailability;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl CartResponse {
    pub fn new(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(|i| i.price * i.quantity as f64).sum();
        Self { items, total }
    }
}
