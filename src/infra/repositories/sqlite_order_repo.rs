use crate::domain::{models::order::Order, ports::OrderRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteOrderRepo {
    pool: SqlitePool,
}

impl SqliteOrderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepo {
    async fn create_many(&self, orders: &[Order]) -> Result<Vec<Order>, AppError> {
        // All lines of a checkout land together or not at all.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = Vec::with_capacity(orders.len());
        for order in orders {
            let row = sqlx::query_as::<_, Order>(
                "INSERT INTO orders (id, user_id, item_id, item_name, quantity, price, order_date, delivered)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                 RETURNING *"
            )
                .bind(&order.id).bind(&order.user_id).bind(&order.item_id).bind(&order.item_name)
                .bind(order.quantity).bind(order.price).bind(order.order_date).bind(order.delivered)
                .fetch_one(&mut *tx).await.map_err(AppError::Database)?;
            created.push(row);
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE user_id = ? ORDER BY order_date DESC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, delivered: Option<bool>) -> Result<Vec<Order>, AppError> {
        match delivered {
            Some(flag) => sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE delivered = ? ORDER BY order_date DESC").bind(flag).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY order_date DESC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn mark_delivered(&self, id: &str) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>("UPDATE orders SET delivered = 1 WHERE id = ? RETURNING *").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or_else(|| AppError::NotFound("Order not found".into()))
    }
}
