use crate::domain::{models::menu::MenuItem, ports::{MenuFilter, MenuRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMenuRepo {
    pool: SqlitePool,
}

impl SqliteMenuRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for SqliteMenuRepo {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items (id, name, description, price, image, category, dietary, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&item.id).bind(&item.name).bind(&item.description).bind(item.price)
            .bind(&item.image).bind(&item.category).bind(&item.dietary).bind(item.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, AppError> {
        let mut sql = String::from("SELECT * FROM menu_items WHERE 1=1");
        if filter.category.is_some() { sql.push_str(" AND category = ?"); }
        if filter.dietary.is_some() { sql.push_str(" AND dietary LIKE ?"); }
        if filter.search.is_some() { sql.push_str(" AND (name LIKE ? OR description LIKE ?)"); }
        sql.push_str(" ORDER BY category ASC, name ASC");

        let mut query = sqlx::query_as::<_, MenuItem>(&sql);
        if let Some(category) = &filter.category { query = query.bind(category.clone()); }
        if let Some(dietary) = &filter.dietary { query = query.bind(format!("%\"{}\"%", dietary)); }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.bind(pattern.clone()).bind(pattern);
        }
        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "UPDATE menu_items SET name=?, description=?, price=?, image=?, category=?, dietary=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&item.name).bind(&item.description).bind(item.price).bind(&item.image)
            .bind(&item.category).bind(&item.dietary).bind(&item.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Menu item not found".into()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Menu item not found".into())); }
        Ok(())
    }
}
