pub mod cart;
pub mod contact;
pub mod health;
pub mod menu;
pub mod order;
pub mod reservation;
