use crate::error::{config_error, env_error, ScheduleResult};
use crate::schedule::{DaySchedule, Weekday, WorkingHours};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default location of the barbershop data file
pub const DEFAULT_DATA_FILE: &str = "data/barbershops.json";

/// Optional file overriding the week new barbershops start with
pub const DEFAULT_HOURS_FILE: &str = "config/default_hours.toml";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding barbershops and barbers
    pub data_file: String,
    /// Timezone used to decide what "today" is
    pub timezone: Tz,
    /// Week given to newly created barbershops
    pub default_hours: WorkingHours,
}

/// Shape of `config/default_hours.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultHoursConfig {
    pub open_time: String,
    pub close_time: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub closed_days: Vec<Weekday>,
}

impl Default for DefaultHoursConfig {
    fn default() -> Self {
        Self {
            open_time: "09:00".to_string(),
            close_time: "18:00".to_string(),
            break_start: Some("12:00".to_string()),
            break_end: Some("13:00".to_string()),
            closed_days: vec![Weekday::Sunday],
        }
    }
}

impl DefaultHoursConfig {
    /// Build the week described by this config
    pub fn to_working_hours(&self) -> ScheduleResult<WorkingHours> {
        let open_day = DaySchedule {
            is_open: true,
            open_time: self.open_time.clone(),
            close_time: self.close_time.clone(),
            break_start: self.break_start.clone(),
            break_end: self.break_end.clone(),
        };
        open_day
            .check_invariants()
            .map_err(|e| config_error(&format!("invalid default hours: {}", e)))?;

        Ok(WorkingHours::from_fn(|day| {
            if self.closed_days.contains(&day) {
                DaySchedule {
                    is_open: false,
                    break_start: None,
                    break_end: None,
                    ..open_day.clone()
                }
            } else {
                open_day.clone()
            }
        }))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            timezone: Tz::UTC,
            default_hours: WorkingHours::default_week(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> ScheduleResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let data_file =
            env::var("BARBERSHOP_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

        let timezone = env::var("TIMEZONE")
            .unwrap_or_else(|_| String::from("UTC"))
            .parse::<Tz>()
            .map_err(|_| env_error("TIMEZONE"))?;

        let default_hours = Self::load_default_hours(DEFAULT_HOURS_FILE)?;

        Ok(Config {
            data_file,
            timezone,
            default_hours,
        })
    }

    /// Read the default week from a TOML file, falling back to the standard week
    pub fn load_default_hours(path: impl AsRef<Path>) -> ScheduleResult<WorkingHours> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => toml::from_str::<DefaultHoursConfig>(&content)?.to_working_hours(),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(WorkingHours::default_week()),
            Err(e) => Err(e.into()),
        }
    }

    /// Today's date in the configured timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hours_config_matches_default_week() {
        let hours = DefaultHoursConfig::default().to_working_hours().unwrap();
        assert_eq!(hours, WorkingHours::default_week());
    }

    #[test]
    fn test_default_hours_from_toml() {
        let config: DefaultHoursConfig = toml::from_str(
            r#"
            open_time = "10:00"
            close_time = "20:00"
            break_start = "14:00"
            break_end = "14:30"
            closed_days = ["saturday", "sunday"]
            "#,
        )
        .unwrap();

        let hours = config.to_working_hours().unwrap();
        assert_eq!(hours.monday.format(), "10:00 - 20:00 (break 14:00 - 14:30)");
        assert!(!hours.saturday.is_open);
        assert!(!hours.sunday.is_open);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DefaultHoursConfig = toml::from_str(r#"close_time = "19:00""#).unwrap();
        let hours = config.to_working_hours().unwrap();
        assert_eq!(hours.friday.open_time, "09:00");
        assert_eq!(hours.friday.close_time, "19:00");
        assert!(!hours.sunday.is_open);
    }

    #[test]
    fn test_invalid_default_hours() {
        let config = DefaultHoursConfig {
            open_time: "18:00".to_string(),
            close_time: "09:00".to_string(),
            ..Default::default()
        };
        assert!(config.to_working_hours().is_err());
    }

    #[test]
    fn test_missing_file_gives_standard_week() {
        let hours = Config::load_default_hours("does/not/exist.toml").unwrap();
        assert_eq!(hours, WorkingHours::default_week());
    }

    #[test]
    fn test_unreadable_hours_file_is_an_error() {
        // A directory exists at the path but cannot be read as a file
        let result = Config::load_default_hours(std::env::temp_dir());
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
