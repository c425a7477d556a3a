use crate::error::{Error, ScheduleResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Parse time string in HH:MM format, both fields exactly two digits
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    if !parts
        .iter()
        .all(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Minutes since midnight for an HH:MM string
pub fn time_to_minutes(time_str: &str) -> ScheduleResult<u32> {
    let (hour, minute) =
        parse_time(time_str).ok_or_else(|| Error::InvalidTime(time_str.to_string()))?;
    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as HH:MM.
///
/// Values past the end of the day are not wrapped, 1440 formats as "24:00".
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Monday to Sunday of the week containing `date`
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date
        .checked_sub_signed(Duration::days(
            date.weekday().num_days_from_monday() as i64,
        ))
        .unwrap_or(date);

    std::array::from_fn(|offset| {
        monday
            .checked_add_signed(Duration::days(offset as i64))
            .unwrap_or(monday)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("12:30:45"), None);
        assert_eq!(parse_time("12"), None);
        assert_eq!(parse_time("12:ab"), None);
        assert_eq!(parse_time(""), None);

        // Fields must be two plain digits
        assert_eq!(parse_time("+9:+5"), None);
        assert_eq!(parse_time("9:5"), None);
        assert_eq!(parse_time("9:00"), None);
        assert_eq!(parse_time("09:5"), None);
        assert_eq!(parse_time(" 09:00"), None);
        assert!(time_to_minutes("+9:+5").is_err());
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("09:30").unwrap(), 570);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);

        match time_to_minutes("9h30") {
            Err(Error::InvalidTime(value)) => assert_eq!(value, "9h30"),
            other => panic!("expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(570), "09:30");
        assert_eq!(minutes_to_time(1439), "23:59");
        assert_eq!(minutes_to_time(1440), "24:00");
    }

    #[test]
    fn test_round_trip_whole_day() {
        for minutes in 0..1440 {
            assert_eq!(time_to_minutes(&minutes_to_time(minutes)).unwrap(), minutes);
        }
    }

    #[test]
    fn test_week_dates() {
        // Wednesday, 2023-01-04
        let wednesday = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
        let week = week_dates(wednesday);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2023, 1, 8).unwrap());

        // Sunday belongs to the week that started the Monday before
        let sunday = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(week_dates(sunday), week);
    }
}
