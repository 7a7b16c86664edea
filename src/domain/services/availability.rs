use chrono::NaiveTime;
use serde::Serialize;

use crate::domain::models::reservation::Reservation;

pub const OPENING_HOUR: u32 = 11;
pub const CLOSING_HOUR: u32 = 22;
/// Guests seatable at one table.
pub const TABLE_CAPACITY: i32 = 6;
/// Tables available per slot.
pub const TOTAL_TABLES: i32 = 10;
pub const SLOT_INTERVAL_MIN: u32 = 30;
pub const MAX_GUESTS: i32 = 60;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SlotAvailability {
    pub time: NaiveTime,
    pub booked_tables: i32,
    pub available: bool,
}

fn slot_minutes(opening_hour: u32, closing_hour: u32) -> impl Iterator<Item = u32> {
    (0u32..)
        .map(move |i| opening_hour * 60 + i * SLOT_INTERVAL_MIN)
        .take_while(move |minutes| *minutes < closing_hour * 60)
}

/// Bookable slot times for a day: 30-minute steps from opening, strictly
/// before closing so the last seating ends before close. Restartable, no
/// side effects.
pub fn slot_times() -> impl Iterator<Item = NaiveTime> {
    slot_minutes(OPENING_HOUR, CLOSING_HOUR)
        .map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap())
}

pub fn is_slot_time(time: NaiveTime) -> bool {
    slot_times().any(|t| t == time)
}

/// Tables already taken at an exact slot time. A reservation counts only
/// against the slot it starts at: 18:00 does not touch 18:30.
pub fn booked_tables_at(reservations: &[Reservation], time: NaiveTime) -> i32 {
    reservations
        .iter()
        .filter(|r| r.time == time)
        .map(|r| r.tables_booked)
        .sum()
}

/// Annotates every slot of the day with its booked-table count, recomputed
/// from the supplied reservation set on each call.
pub fn day_availability(reservations: &[Reservation]) -> Vec<SlotAvailability> {
    slot_times()
        .map(|time| {
            let booked_tables = booked_tables_at(reservations, time);
            SlotAvailability {
                time,
                booked_tables,
                available: booked_tables < TOTAL_TABLES,
            }
        })
        .collect()
}

/// Tables a party consumes: ceil(guests / TABLE_CAPACITY), always >= 1 for
/// a positive guest count.
pub fn tables_needed(guests: i32) -> i32 {
    (guests + TABLE_CAPACITY - 1) / TABLE_CAPACITY
}

pub fn fits_capacity(booked_tables: i32, tables_needed: i32) -> bool {
    booked_tables + tables_needed <= TOTAL_TABLES
}
