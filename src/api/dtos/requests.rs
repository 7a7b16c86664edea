use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category: String,
    pub dietary: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub dietary: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub dietary: Option<String>,
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct AddToCartRequest {
    pub menu_item_id: String,
}

#[derive(Deserialize)]
pub struct ChangeQuantityRequest {
    /// Signed delta applied to the current quantity, stepper-style.
    pub change: i32,
}

#[derive(Deserialize)]
pub struct OrdersQuery {
    /// "delivered" | "pending"; absent means everything.
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub date: String,
    /// Missing when the user never picked a slot; rejected as such.
    pub time: Option<String>,
    pub guests: i32,
}

#[derive(Deserialize)]
pub struct ReservationsQuery {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
