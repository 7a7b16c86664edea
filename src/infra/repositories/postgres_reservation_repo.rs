use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresReservationRepo {
    pool: PgPool,
}

impl PostgresReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>("INSERT INTO reservations (id, owner_id, date, time, guests, tables_booked, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *").bind(&reservation.id).bind(&reservation.owner_id).bind(reservation.date).bind(reservation.time).bind(reservation.guests).bind(reservation.tables_booked).bind(reservation.created_at).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date = $1 ORDER BY time ASC").bind(date).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_owner_from(&self, owner_id: &str, from: NaiveDate) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE owner_id = $1 AND date >= $2 ORDER BY date ASC, time ASC").bind(owner_id).bind(from).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Reservation>, AppError> {
        match date {
            Some(d) => sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date = $1 ORDER BY time ASC").bind(d).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY date ASC, time ASC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn delete_owned(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1 AND owner_id = $2").bind(id).bind(owner_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Reservation not found".into())); }
        Ok(())
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Reservation not found".into())); }
        Ok(())
    }
}
