use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category: String,
    /// JSON array of dietary tags ("Vegetarian", "Vegan", "Gluten-Free").
    pub dietary: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewMenuItemParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category: String,
    pub dietary: Option<Vec<String>>,
}

impl MenuItem {
    pub fn new(params: NewMenuItemParams) -> Self {
        let dietary = params
            .dietary
            .map(|tags| serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string()));

        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
            category: params.category,
            dietary,
            created_at: Utc::now(),
        }
    }
}
