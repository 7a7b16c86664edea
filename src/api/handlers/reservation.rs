use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateReservationRequest, ReservationsQuery, SlotsQuery};
use crate::api::dtos::responses::SlotsResponse;
use crate::api::extractors::auth::{AuthUser, StaffUser};
use crate::domain::models::reservation::Reservation;
use crate::domain::services::availability::{
    booked_tables_at, day_availability, fits_capacity, is_slot_time, tables_needed, MAX_GUESTS,
};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))
}

/// Availability for every slot of one day, computed over all reservations
/// for that date. Callers re-check at submission time; this view can go
/// stale the moment someone else books.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&query.date)?;

    let reservations = state.reservation_repo.list_by_date(date).await?;
    let slots = day_availability(&reservations);

    Ok(Json(SlotsResponse { date, slots }))
}

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;

    let time_raw = payload
        .time
        .ok_or(AppError::Validation("Please select a time slot".into()))?;
    let time = parse_time(&time_raw)?;

    if !is_slot_time(time) {
        return Err(AppError::Validation(
            "Time must be a 30-minute slot within opening hours".into(),
        ));
    }

    if payload.guests < 1 || payload.guests > MAX_GUESTS {
        return Err(AppError::Validation(format!(
            "Guest count must be between 1 and {}",
            MAX_GUESTS
        )));
    }

    let needed = tables_needed(payload.guests);

    // Fresh read at submission time; the availability shown to the user may
    // be stale. Two submissions can still interleave between this read and
    // the insert, the store is the only synchronization point.
    let existing = state.reservation_repo.list_by_date(date).await?;
    let booked = booked_tables_at(&existing, time);

    if !fits_capacity(booked, needed) {
        warn!(
            "Reservation rejected: {} tables booked at {} {}, party of {} needs {}",
            booked, date, time, payload.guests, needed
        );
        return Err(AppError::CapacityExceeded(
            "All tables are fully booked for this slot".into(),
        ));
    }

    let reservation = Reservation::new(user.id, date, time, payload.guests, needed);
    let created = state.reservation_repo.create(&reservation).await?;

    info!("Reservation confirmed: {} for {} at {}", created.id, created.date, created.time);
    Ok(Json(created))
}

/// The caller's reservations from today onward.
pub async fn list_my_reservations(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let reservations = state.reservation_repo.list_by_owner_from(&user.id, today).await?;
    Ok(Json(reservations))
}

pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_repo.delete_owned(&user.id, &reservation_id).await?;
    info!("Reservation deleted: {}", reservation_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn list_all_reservations(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Query(query): Query<ReservationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let reservations = state.reservation_repo.list(date).await?;
    Ok(Json(reservations))
}

pub async fn admin_delete_reservation(
    State(state): State<Arc<AppState>>,
    StaffUser(staff): StaffUser,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_repo.delete(&reservation_id).await?;
    info!("Reservation {} deleted by staff {}", reservation_id, staff.id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
