use crate::domain::{models::cart::CartItem, ports::CartRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCartRepo {
    pool: SqlitePool,
}

impl SqliteCartRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for SqliteCartRepo {
    async fn create(&self, item: &CartItem) -> Result<CartItem, AppError> {
        sqlx::query_as::<_, CartItem>(
            "INSERT INTO cart_items (id, user_id, menu_item_id, name, price, quantity, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&item.id).bind(&item.user_id).bind(&item.menu_item_id).bind(&item.name)
            .bind(item.price).bind(item.quantity).bind(item.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<CartItem>, AppError> {
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE user_id = ? AND id = ?").bind(user_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_menu_item(&self, user_id: &str, menu_item_id: &str) -> Result<Option<CartItem>, AppError> {
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE user_id = ? AND menu_item_id = ?").bind(user_id).bind(menu_item_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<CartItem>, AppError> {
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE user_id = ? ORDER BY created_at ASC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_all(&self) -> Result<Vec<CartItem>, AppError> {
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items ORDER BY user_id ASC, created_at ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn set_quantity(&self, user_id: &str, id: &str, quantity: i32) -> Result<CartItem, AppError> {
        sqlx::query_as::<_, CartItem>("UPDATE cart_items SET quantity = ? WHERE id = ? AND user_id = ? RETURNING *").bind(quantity).bind(id).bind(user_id).fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or_else(|| AppError::NotFound("Cart item not found".into()))
    }
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND user_id = ?").bind(id).bind(user_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Cart item not found".into())); }
        Ok(())
    }
    async fn clear_user(&self, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = ?").bind(user_id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
