use super::time::time_to_minutes;
use crate::error::{schedule_error, Error, ScheduleResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Days of the week, in the order schedules are checked and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Key used for this day in stored working hours
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Converts from chrono's Weekday
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    /// The weekday a calendar date falls on
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_chrono(date.weekday())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.key() == lower || day.key()[..3] == lower)
            .ok_or_else(|| schedule_error(format!("unknown weekday '{}'", s)))
    }
}

/// Operating rule for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    /// Opening time (HH:MM), only meaningful when open
    pub open_time: String,
    /// Closing time (HH:MM), only meaningful when open
    pub close_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
}

impl DaySchedule {
    /// An open day without a break
    pub fn open(open_time: impl Into<String>, close_time: impl Into<String>) -> Self {
        Self {
            is_open: true,
            open_time: open_time.into(),
            close_time: close_time.into(),
            break_start: None,
            break_end: None,
        }
    }

    /// A closed day. The times are kept so the editor has something to show when reopening.
    pub fn closed() -> Self {
        Self {
            is_open: false,
            ..Self::open("09:00", "18:00")
        }
    }

    /// Add a break window to this day
    pub fn with_break(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.break_start = Some(start.into());
        self.break_end = Some(end.into());
        self
    }

    /// The break window, only when both ends are set
    pub fn break_window(&self) -> Option<(&str, &str)> {
        match (self.break_start.as_deref(), self.break_end.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn has_break(&self) -> bool {
        self.break_window().is_some()
    }

    /// Check that an open day's window is ordered and its break sits inside it
    pub fn check_invariants(&self) -> ScheduleResult<()> {
        if !self.is_open {
            return Ok(());
        }

        let open = time_to_minutes(&self.open_time)?;
        let close = time_to_minutes(&self.close_time)?;
        if open >= close {
            return Err(schedule_error(format!(
                "opening time {} must be before closing time {}",
                self.open_time, self.close_time
            )));
        }

        match (self.break_start.as_deref(), self.break_end.as_deref()) {
            (None, None) => Ok(()),
            (Some(start), Some(end)) => {
                let break_start = time_to_minutes(start)?;
                let break_end = time_to_minutes(end)?;
                if open <= break_start && break_start < break_end && break_end <= close {
                    Ok(())
                } else {
                    Err(schedule_error(format!(
                        "break {} - {} must lie within {} - {}",
                        start, end, self.open_time, self.close_time
                    )))
                }
            }
            _ => Err(schedule_error("break start and end must be set together")),
        }
    }

    /// Format the day as a human-readable string
    pub fn format(&self) -> String {
        if !self.is_open {
            return "Closed".to_string();
        }

        match self.break_window() {
            Some((start, end)) => format!(
                "{} - {} (break {} - {})",
                self.open_time, self.close_time, start, end
            ),
            None => format!("{} - {}", self.open_time, self.close_time),
        }
    }
}

/// Read access to a week's per-day schedules, which may be sparse
pub trait DayLookup {
    fn day(&self, day: Weekday) -> Option<&DaySchedule>;
}

/// A full week of operating rules; every day is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WorkingHours {
    /// Build a week by computing each day's schedule
    pub fn from_fn(mut f: impl FnMut(Weekday) -> DaySchedule) -> Self {
        Self {
            monday: f(Weekday::Monday),
            tuesday: f(Weekday::Tuesday),
            wednesday: f(Weekday::Wednesday),
            thursday: f(Weekday::Thursday),
            friday: f(Weekday::Friday),
            saturday: f(Weekday::Saturday),
            sunday: f(Weekday::Sunday),
        }
    }

    /// Monday to Saturday 09:00 - 18:00 with a lunch break, closed on Sunday
    pub fn default_week() -> Self {
        Self::from_fn(|day| match day {
            Weekday::Sunday => DaySchedule::closed(),
            _ => DaySchedule::open("09:00", "18:00").with_break("12:00", "13:00"),
        })
    }

    pub fn get(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn get_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Replace one day's schedule
    pub fn set(&mut self, day: Weekday, schedule: DaySchedule) {
        *self.get_mut(day) = schedule;
    }

    /// Iterate days Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.get(day)))
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::default_week()
    }
}

impl DayLookup for WorkingHours {
    fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        Some(self.get(day))
    }
}

/// A barber's per-day overrides of the barbershop's week.
///
/// A day set here replaces the barbershop's day wholesale; an absent day inherits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWorkingHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DaySchedule>,
}

impl CustomWorkingHours {
    pub fn get(&self, day: Weekday) -> Option<&DaySchedule> {
        self.slot(day).as_ref()
    }

    /// Override a day, or pass `None` to inherit the barbershop's day again
    pub fn set(&mut self, day: Weekday, schedule: Option<DaySchedule>) {
        *self.slot_mut(day) = schedule;
    }

    /// Builder-style variant of [`CustomWorkingHours::set`]
    pub fn with_day(mut self, day: Weekday, schedule: DaySchedule) -> Self {
        self.set(day, Some(schedule));
        self
    }

    pub fn is_empty(&self) -> bool {
        Weekday::ALL.iter().all(|day| self.get(*day).is_none())
    }

    /// Iterate the overridden days, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL
            .into_iter()
            .filter_map(move |day| self.get(day).map(|schedule| (day, schedule)))
    }

    fn slot(&self, day: Weekday) -> &Option<DaySchedule> {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn slot_mut(&mut self, day: Weekday) -> &mut Option<DaySchedule> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

impl DayLookup for CustomWorkingHours {
    fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.get(day)
    }
}

/// A service offered by a barbershop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: u32,
}

/// A barbershop and its base weekly hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barbershop {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub services: Vec<Service>,
    pub working_hours: WorkingHours,
}

impl Barbershop {
    /// Create a new barbershop with a fresh id
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        working_hours: WorkingHours,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            address: String::new(),
            phone: String::new(),
            services: Vec::new(),
            working_hours,
        }
    }
}

/// A barber working at a barbershop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberProfile {
    pub id: String,
    pub user_id: String,
    pub barbershop_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_working_hours: Option<CustomWorkingHours>,
}

impl BarberProfile {
    /// Create a new barber profile with a fresh id and no custom hours
    pub fn new(
        barbershop_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            barbershop_id: barbershop_id.into(),
            name: name.into(),
            custom_working_hours: None,
        }
    }
}
