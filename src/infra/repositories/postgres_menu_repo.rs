use crate::domain::{models::menu::MenuItem, ports::{MenuFilter, MenuRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMenuRepo {
    pool: PgPool,
}

impl PostgresMenuRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepo {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>("INSERT INTO menu_items (id, name, description, price, image, category, dietary, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *").bind(&item.id).bind(&item.name).bind(&item.description).bind(item.price).bind(&item.image).bind(&item.category).bind(&item.dietary).bind(item.created_at).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, AppError> {
        let mut sql = String::from("SELECT * FROM menu_items WHERE 1=1");
        let mut param = 0;
        if filter.category.is_some() { param += 1; sql.push_str(&format!(" AND category = ${}", param)); }
        if filter.dietary.is_some() { param += 1; sql.push_str(&format!(" AND dietary LIKE ${}", param)); }
        if filter.search.is_some() {
            sql.push_str(&format!(" AND (name ILIKE ${} OR description ILIKE ${})", param + 1, param + 2));
        }
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
        sqlx::query_as::<_, MenuItem>("UPDATE menu_items SET name=$1, description=$2, price=$3, image=$4, category=$5, dietary=$6 WHERE id=$7 RETURNING *").bind(&item.name).bind(&item.description).bind(item.price).bind(&item.image).bind(&item.category).bind(&item.dietary).bind(&item.id).fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or_else(|| AppError::NotFound("Menu item not found".into()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Menu item not found".into())); }
        Ok(())
    }
}
