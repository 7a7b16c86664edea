use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Employee,
    Admin,
}

impl UserRole {
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Employee | UserRole::Admin)
    }
}

/// Identity resolved by the external identity service. Only what the
/// storefront needs: an opaque id, a contact address, and a role.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}
