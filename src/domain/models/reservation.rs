use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A confirmed table reservation. Records are append-only: created on a
/// successful submission, deleted by their owner or staff, never updated.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    /// Slot time-of-day at 30-minute granularity within opening hours.
    pub time: NaiveTime,
    pub guests: i32,
    /// Tables consumed by this party, derived at creation time.
    pub tables_booked: i32,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(owner_id: String, date: NaiveDate, time: NaiveTime, guests: i32, tables_booked: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id,
            date,
            time,
            guests,
            tables_booked,
            created_at: Utc::now(),
        }
    }
}
