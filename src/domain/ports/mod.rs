use crate::domain::models::{
    cart::CartItem, contact::ContactMessage, menu::MenuItem, order::Order,
    reservation::Reservation, user::CurrentUser,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub dietary: Option<String>,
    pub search: Option<String>,
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, AppError>;
    async fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, AppError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn create(&self, item: &CartItem) -> Result<CartItem, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<CartItem>, AppError>;
    async fn find_by_menu_item(&self, user_id: &str, menu_item_id: &str) -> Result<Option<CartItem>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<CartItem>, AppError>;
    async fn list_all(&self) -> Result<Vec<CartItem>, AppError>;
    async fn set_quantity(&self, user_id: &str, id: &str, quantity: i32) -> Result<CartItem, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;
    async fn clear_user(&self, user_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_many(&self, orders: &[Order]) -> Result<Vec<Order>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError>;
    async fn list(&self, delivered: Option<bool>) -> Result<Vec<Order>, AppError>;
    async fn mark_delivered(&self, id: &str) -> Result<Order, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, AppError>;
    async fn list_by_owner_from(&self, owner_id: &str, from: NaiveDate) -> Result<Vec<Reservation>, AppError>;
    async fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Reservation>, AppError>;
    /// Owner-scoped delete; NotFound when the row exists but belongs to
    /// someone else.
    async fn delete_owned(&self, owner_id: &str, id: &str) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError>;
    async fn list(&self) -> Result<Vec<ContactMessage>, AppError>;
}

/// Seam to the hosted identity service. The storefront never handles
/// credentials itself; it hands the bearer token over and gets back who the
/// caller is, if anyone.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, access_token: &str) -> Result<Option<CurrentUser>, AppError>;
}
