use std::sync::Arc;
use crate::domain::ports::{
    CartRepository, ContactRepository, IdentityProvider, MenuRepository,
    OrderRepository, ReservationRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub menu_repo: Arc<dyn MenuRepository>,
    pub cart_repo: Arc<dyn CartRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub identity: Arc<dyn IdentityProvider>,
}
