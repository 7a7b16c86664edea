pub mod postgres_cart_repo;
pub mod postgres_contact_repo;
pub mod postgres_menu_repo;
pub mod postgres_order_repo;
pub mod postgres_reservation_repo;
pub mod sqlite_cart_repo;
pub mod sqlite_contact_repo;
pub mod sqlite_menu_repo;
pub mod sqlite_order_repo;
pub mod sqlite_reservation_repo;
