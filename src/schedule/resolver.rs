use super::models::{BarberProfile, CustomWorkingHours, DaySchedule, Weekday, WorkingHours};
use tracing::debug;

/// Where a barber's effective schedule for a day comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDay<'a> {
    /// The barbershop's day, unchanged
    Inherited(&'a DaySchedule),
    /// The barber's own schedule, replacing the barbershop's day wholesale
    Overridden(&'a DaySchedule),
}

impl<'a> ResolvedDay<'a> {
    pub fn schedule(self) -> &'a DaySchedule {
        match self {
            ResolvedDay::Inherited(schedule) | ResolvedDay::Overridden(schedule) => schedule,
        }
    }

    pub fn is_override(self) -> bool {
        matches!(self, ResolvedDay::Overridden(_))
    }
}

/// Resolve one day of a barber's week
pub fn resolve_day<'a>(
    custom: Option<&'a CustomWorkingHours>,
    shop_hours: &'a WorkingHours,
    day: Weekday,
) -> ResolvedDay<'a> {
    match custom.and_then(|custom| custom.get(day)) {
        Some(schedule) => ResolvedDay::Overridden(schedule),
        None => ResolvedDay::Inherited(shop_hours.get(day)),
    }
}

/// Overlay custom days onto a copy of the barbershop's week
pub fn apply_overrides(shop_hours: &WorkingHours, custom: &CustomWorkingHours) -> WorkingHours {
    let mut effective = shop_hours.clone();
    for (day, schedule) in custom.iter() {
        effective.set(day, schedule.clone());
    }
    effective
}

/// The week a barber actually works: their overrides on top of the barbershop's hours.
///
/// No validation happens here; hours are validated before they are saved.
pub fn get_effective_barber_working_hours(
    profile: &BarberProfile,
    shop_hours: &WorkingHours,
) -> WorkingHours {
    match &profile.custom_working_hours {
        Some(custom) => {
            debug!(
                "Applying {} custom day(s) for barber {}",
                custom.iter().count(),
                profile.id
            );
            apply_overrides(shop_hours, custom)
        }
        None => shop_hours.clone(),
    }
}
