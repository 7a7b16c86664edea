use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateContactRequest;
use crate::api::extractors::auth::{AuthUser, StaffUser};
use crate::domain::models::contact::ContactMessage;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(AppError::Validation("Name, email and message are required".into()));
    }

    let message = ContactMessage::new(user.id, payload.name, payload.email, payload.message);
    let created = state.contact_repo.create(&message).await?;

    info!("Contact message received: {}", created.id);
    Ok(Json(created))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.contact_repo.list().await?;
    Ok(Json(messages))
}
