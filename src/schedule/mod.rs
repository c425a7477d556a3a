//! Working-hours rules for barbershops and their barbers.
//!
//! A barbershop owns a full week of [`WorkingHours`]. A barber may override single days
//! with [`CustomWorkingHours`]; the validator keeps those overrides inside the shop's
//! hours, the resolver merges them, and the availability generator turns the result into
//! bookable start times.

pub mod availability;
pub mod models;
pub mod resolver;
pub mod time;
pub mod validator;

pub use availability::{
    generate_available_time_slots, generate_weekly_availability, slots_for_day, SLOT_STEP_MINUTES,
};
pub use models::{
    BarberProfile, Barbershop, CustomWorkingHours, DayLookup, DaySchedule, Service, Weekday,
    WorkingHours,
};
pub use resolver::{apply_overrides, get_effective_barber_working_hours, resolve_day, ResolvedDay};
pub use time::{minutes_to_time, parse_time, time_to_minutes, week_dates};
pub use validator::{validate_barber_working_hours, ValidationResult};
