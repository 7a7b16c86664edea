use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(user_id: String, name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}
