use super::models::{DayLookup, DaySchedule, Weekday, WorkingHours};
use super::time::{minutes_to_time, time_to_minutes, week_dates};
use crate::error::ScheduleResult;
use chrono::NaiveDate;
use tracing::warn;

/// Spacing between bookable start times.
///
/// Slots are start-time candidates only; nothing checks that a service of a given
/// length fits before the next break or closing time.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// Bookable start times on `date`, ascending, with the break removed.
///
/// Closed days, days missing from `hours`, and days with unparseable times all yield
/// an empty list. Existing bookings are not taken into account.
pub fn generate_available_time_slots<W>(hours: &W, date: NaiveDate) -> Vec<String>
where
    W: DayLookup + ?Sized,
{
    let day = Weekday::for_date(date);
    match hours.day(day) {
        Some(schedule) => slots_for_day(schedule),
        None => Vec::new(),
    }
}

/// Bookable start times for a single day's schedule
pub fn slots_for_day(schedule: &DaySchedule) -> Vec<String> {
    if !schedule.is_open {
        return Vec::new();
    }

    match slot_minutes(schedule) {
        Ok(minutes) => minutes.into_iter().map(minutes_to_time).collect(),
        Err(e) => {
            warn!("Skipping slot generation for malformed schedule: {}", e);
            Vec::new()
        }
    }
}

fn slot_minutes(schedule: &DaySchedule) -> ScheduleResult<Vec<u32>> {
    let open = time_to_minutes(&schedule.open_time)?;
    let close = time_to_minutes(&schedule.close_time)?;
    let break_window = match schedule.break_window() {
        Some((start, end)) => Some((time_to_minutes(start)?, time_to_minutes(end)?)),
        None => None,
    };

    Ok((open..close)
        .step_by(SLOT_STEP_MINUTES as usize)
        .filter(|minutes| match break_window {
            Some((start, end)) => !(start..end).contains(minutes),
            None => true,
        })
        .collect())
}

/// Slots for each day of the Monday to Sunday week containing `date`
pub fn generate_weekly_availability(
    hours: &WorkingHours,
    date: NaiveDate,
) -> Vec<(NaiveDate, Vec<String>)> {
    week_dates(date)
        .into_iter()
        .map(|day| (day, generate_available_time_slots(hours, day)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::CustomWorkingHours;

    // 2024-01-01 was a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_break_is_excluded() {
        let day = DaySchedule::open("09:00", "12:00").with_break("10:00", "10:30");
        assert_eq!(
            slots_for_day(&day),
            vec!["09:00", "09:30", "10:30", "11:00", "11:30"]
        );
    }

    #[test]
    fn test_closed_day_has_no_slots() {
        let hours = WorkingHours::from_fn(|_| DaySchedule::closed());
        assert!(generate_available_time_slots(&hours, monday()).is_empty());

        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert!(generate_available_time_slots(&WorkingHours::default_week(), sunday).is_empty());
    }

    #[test]
    fn test_missing_day_has_no_slots() {
        let sparse = CustomWorkingHours::default()
            .with_day(Weekday::Tuesday, DaySchedule::open("09:00", "10:00"));

        assert!(generate_available_time_slots(&sparse, monday()).is_empty());
        let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            generate_available_time_slots(&sparse, tuesday),
            vec!["09:00", "09:30"]
        );
    }

    #[test]
    fn test_full_open_day() {
        let hours = WorkingHours::from_fn(|_| DaySchedule::open("08:00", "18:00"));
        let slots = generate_available_time_slots(&hours, monday());

        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:30"));
    }

    #[test]
    fn test_close_time_is_exclusive_for_odd_windows() {
        let day = DaySchedule::open("09:15", "10:30");
        assert_eq!(slots_for_day(&day), vec!["09:15", "09:45", "10:15"]);
    }

    #[test]
    fn test_malformed_schedule_has_no_slots() {
        let day = DaySchedule::open("09:00", "late");
        assert!(slots_for_day(&day).is_empty());
    }

    #[test]
    fn test_weekly_availability() {
        let week = generate_weekly_availability(&WorkingHours::default_week(), monday());

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, monday());
        // 09:00 - 18:00 is 18 slots, minus two for the lunch break
        assert_eq!(week[0].1.len(), 16);
        assert!(!week[0].1.contains(&"12:00".to_string()));
        assert!(week[6].1.is_empty());
    }
}
