use crate::domain::{models::order::Order, ports::OrderRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresOrderRepo {
    pool: PgPool,
}

impl PostgresOrderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepo {
    async fn create_many(&self, orders: &[Order]) -> Result<Vec<Order>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = Vec::with_capacity(orders.len());
        for order in orders {
            let row = sqlx::query_as::<_, Order>("INSERT INTO orders (id, user_id, item_id, item_name, quantity, price, order_date, delivered) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *").bind(&order.id).bind(&order.user_id).bind(&order.item_id).bind(&order.item_name).bind(order.quantity).bind(order.price).bind(order.order_date).bind(order.delivered).fetch_one(&mut *tx).await.map_err(AppError::Database)?;
            created.push(row);
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE user_id = $1 ORDER BY order_date DESC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, delivered: Option<bool>) -> Result<Vec<Order>, AppError> {
        match delivered {
            Some(flag) => sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE delivered = $1 ORDER BY order_date DESC").bind(flag).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY order_date DESC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn mark_delivered(&self, id: &str) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>("UPDATE orders SET delivered = TRUE WHERE id = $1 RETURNING *").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or_else(|| AppError::NotFound("Order not found".into()))
    }
}
