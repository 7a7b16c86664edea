pub mod cart;
pub mod contact;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod user;
