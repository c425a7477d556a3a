use super::models::{CustomWorkingHours, DaySchedule, Weekday, WorkingHours};
use super::time::time_to_minutes;
use crate::error::{Error, ScheduleResult};
use serde::Serialize;
use tracing::debug;

/// Outcome of checking a barber's hours against the barbershop's hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Turn a failed validation into an error carrying every violation
    pub fn into_result(self) -> ScheduleResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::Validation(self.errors))
        }
    }
}

/// Check that every open day in a barber's custom hours fits inside the barbershop's day.
///
/// Days the barber leaves unset or closed impose nothing. Errors come out Monday first;
/// within a day the order is shop closed, opening bound, closing bound, break bound.
pub fn validate_barber_working_hours(
    barber_hours: &CustomWorkingHours,
    shop_hours: &WorkingHours,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (day, barber_day) in barber_hours.iter() {
        if !barber_day.is_open {
            continue;
        }

        let shop_day = shop_hours.get(day);
        if !shop_day.is_open {
            errors.push(format!("{}: the barbershop is closed on this day", day));
            continue;
        }

        if let Err(e) = check_day(day, barber_day, shop_day, &mut errors) {
            match e {
                Error::InvalidTime(value) => {
                    errors.push(format!("{}: invalid time '{}'", day, value))
                }
                other => errors.push(format!("{}: {}", day, other)),
            }
        }
    }

    debug!(
        "Validated barber hours against barbershop hours: {} violation(s)",
        errors.len()
    );

    ValidationResult::from_errors(errors)
}

fn check_day(
    day: Weekday,
    barber: &DaySchedule,
    shop: &DaySchedule,
    errors: &mut Vec<String>,
) -> ScheduleResult<()> {
    let barber_open = time_to_minutes(&barber.open_time)?;
    let barber_close = time_to_minutes(&barber.close_time)?;
    let shop_open = time_to_minutes(&shop.open_time)?;
    let shop_close = time_to_minutes(&shop.close_time)?;

    if barber_open < shop_open {
        errors.push(format!(
            "{}: opening time {} is earlier than the barbershop's opening time {}",
            day, barber.open_time, shop.open_time
        ));
    }

    if barber_close > shop_close {
        errors.push(format!(
            "{}: closing time {} is later than the barbershop's closing time {}",
            day, barber.close_time, shop.close_time
        ));
    }

    // A barber's break is only constrained when the shop has a break that day
    if let (Some((barber_start, barber_end)), Some((shop_start, shop_end))) =
        (barber.break_window(), shop.break_window())
    {
        let within = time_to_minutes(barber_start)? >= time_to_minutes(shop_start)?
            && time_to_minutes(barber_end)? <= time_to_minutes(shop_end)?;
        if !within {
            errors.push(format!(
                "{}: break {} - {} must be within the barbershop's break {} - {}",
                day, barber_start, barber_end, shop_start, shop_end
            ));
        }
    }

    Ok(())
}
