mod hours;
mod slots;

use barbershop_hours::config::Config;
use barbershop_hours::error::{Error, ScheduleResult};
use barbershop_hours::schedule::{DaySchedule, Weekday};
use barbershop_hours::service::HoursService;
use barbershop_hours::store::ScheduleStore;
use chrono::NaiveDate;

/// Usage text printed for unknown commands
pub const USAGE: &str = "\
usage: shop_hours <command> [args]

  shops
  barbers <shop>
  create-shop <owner> <name> [address] [phone]
  add-barber <shop> <user> <name>
  week <shop> [--barber ID]
  slots <shop> [--barber ID] [--date YYYY-MM-DD]
  agenda <shop> [--barber ID] [--date YYYY-MM-DD]
  set-shop-day <shop> <day> <open> <close> [break_start break_end]
  close-shop-day <shop> <day>
  set-barber-day <barber> <day> <open> <close> [break_start break_end]
  close-barber-day <barber> <day>
  clear-barber-day <barber> <day>";

/// What a command printed, and whether the store needs saving
#[derive(Debug)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub modified: bool,
}

impl CommandOutcome {
    fn print(lines: Vec<String>) -> Self {
        Self {
            lines,
            modified: false,
        }
    }

    fn changed(line: String) -> Self {
        Self {
            lines: vec![line],
            modified: true,
        }
    }
}

/// Run one command line against the service
pub async fn dispatch<S: ScheduleStore>(
    service: &HoursService<S>,
    config: &Config,
    args: &[String],
) -> ScheduleResult<CommandOutcome> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(CommandOutcome::print(vec![USAGE.to_string()]));
    };
    let args = Args::parse(rest)?;

    match command.as_str() {
        "shops" => slots::list_shops(service).await,
        "barbers" => slots::list_barbers(service, args.positional(0)?).await,
        "week" => slots::week(service, args.positional(0)?, args.barber.as_deref()).await,
        "slots" => {
            let date = args.date.unwrap_or_else(|| config.today());
            slots::slots(service, args.positional(0)?, args.barber.as_deref(), date).await
        }
        "agenda" => {
            let date = args.date.unwrap_or_else(|| config.today());
            slots::agenda(service, args.positional(0)?, args.barber.as_deref(), date).await
        }
        "create-shop" => {
            hours::create_shop(
                service,
                args.positional(0)?,
                args.positional(1)?,
                args.optional(2).unwrap_or_default(),
                args.optional(3).unwrap_or_default(),
            )
            .await
        }
        "add-barber" => {
            hours::add_barber(
                service,
                args.positional(0)?,
                args.positional(1)?,
                args.positional(2)?,
            )
            .await
        }
        "set-shop-day" => {
            let schedule = args.day_schedule(2)?;
            hours::set_shop_day(service, args.positional(0)?, args.weekday(1)?, schedule).await
        }
        "close-shop-day" => {
            hours::set_shop_day(
                service,
                args.positional(0)?,
                args.weekday(1)?,
                DaySchedule::closed(),
            )
            .await
        }
        "set-barber-day" => {
            let schedule = args.day_schedule(2)?;
            hours::set_barber_day(service, args.positional(0)?, args.weekday(1)?, Some(schedule))
                .await
        }
        "close-barber-day" => {
            hours::set_barber_day(
                service,
                args.positional(0)?,
                args.weekday(1)?,
                Some(DaySchedule::closed()),
            )
            .await
        }
        "clear-barber-day" => {
            hours::set_barber_day(service, args.positional(0)?, args.weekday(1)?, None).await
        }
        other => Err(Error::Other(format!("unknown command '{}'\n\n{}", other, USAGE))),
    }
}

/// Positional arguments plus the `--barber` and `--date` flags
#[derive(Debug, Default)]
struct Args {
    positional: Vec<String>,
    barber: Option<String>,
    date: Option<NaiveDate>,
}

impl Args {
    fn parse(args: &[String]) -> ScheduleResult<Self> {
        let mut parsed = Args::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--barber" => parsed.barber = Some(flag_value(&mut iter, "--barber")?),
                "--date" => {
                    let value = flag_value(&mut iter, "--date")?;
                    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                        Error::Other(format!("invalid date '{}', expected YYYY-MM-DD", value))
                    })?;
                    parsed.date = Some(date);
                }
                _ => parsed.positional.push(arg.clone()),
            }
        }

        Ok(parsed)
    }

    fn optional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    fn positional(&self, index: usize) -> ScheduleResult<&str> {
        self.optional(index)
            .ok_or_else(|| Error::Other(format!("missing argument {}\n\n{}", index + 1, USAGE)))
    }

    fn weekday(&self, index: usize) -> ScheduleResult<Weekday> {
        self.positional(index)?.parse()
    }

    /// `<open> <close> [break_start break_end]` starting at `index`
    fn day_schedule(&self, index: usize) -> ScheduleResult<DaySchedule> {
        let schedule = DaySchedule::open(self.positional(index)?, self.positional(index + 1)?);
        match (self.optional(index + 2), self.optional(index + 3)) {
            (Some(start), Some(end)) => Ok(schedule.with_break(start, end)),
            (None, None) => Ok(schedule),
            _ => Err(Error::Other(
                "a break needs both a start and an end time".to_string(),
            )),
        }
    }
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> ScheduleResult<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| Error::Other(format!("{} needs a value", flag)))
}
