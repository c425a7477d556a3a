use super::CommandOutcome;
use barbershop_hours::error::ScheduleResult;
use barbershop_hours::schedule::Weekday;
use barbershop_hours::service::HoursService;
use barbershop_hours::store::ScheduleStore;
use chrono::NaiveDate;

pub async fn list_shops<S: ScheduleStore>(
    service: &HoursService<S>,
) -> ScheduleResult<CommandOutcome> {
    let mut shops = service.store().list_barbershops().await?;
    shops.sort_by(|a, b| a.name.cmp(&b.name));

    if shops.is_empty() {
        return Ok(CommandOutcome::print(vec!["No barbershops yet".to_string()]));
    }
    Ok(CommandOutcome::print(
        shops
            .into_iter()
            .map(|shop| format!("{}  {}", shop.id, shop.name))
            .collect(),
    ))
}

pub async fn list_barbers<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
) -> ScheduleResult<CommandOutcome> {
    let barbers = service.store().list_barbers_for_shop(shop_id).await?;

    if barbers.is_empty() {
        return Ok(CommandOutcome::print(vec![format!(
            "No barbers at barbershop {}",
            shop_id
        )]));
    }
    Ok(CommandOutcome::print(
        barbers
            .into_iter()
            .map(|barber| {
                let custom = if barber.custom_working_hours.is_some() {
                    " (custom hours)"
                } else {
                    ""
                };
                format!("{}  {}{}", barber.id, barber.name, custom)
            })
            .collect(),
    ))
}

pub async fn week<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
    barber_id: Option<&str>,
) -> ScheduleResult<CommandOutcome> {
    let mut lines = service.weekly_summary(shop_id, barber_id).await?;
    if barber_id.is_some() {
        lines.push("* barber's own hours".to_string());
    }
    Ok(CommandOutcome::print(lines))
}

pub async fn slots<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
    barber_id: Option<&str>,
    date: NaiveDate,
) -> ScheduleResult<CommandOutcome> {
    let slots = service.available_slots(shop_id, barber_id, date).await?;
    Ok(CommandOutcome::print(vec![format_day(date, &slots)]))
}

pub async fn agenda<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
    barber_id: Option<&str>,
    date: NaiveDate,
) -> ScheduleResult<CommandOutcome> {
    let week = service.weekly_availability(shop_id, barber_id, date).await?;
    Ok(CommandOutcome::print(
        week.iter()
            .map(|(day, slots)| format_day(*day, slots))
            .collect(),
    ))
}

fn format_day(date: NaiveDate, slots: &[String]) -> String {
    let day = Weekday::for_date(date);
    if slots.is_empty() {
        format!("No available times on {} {}", day, date.format("%Y-%m-%d"))
    } else {
        format!("{} {}: {}", day, date.format("%Y-%m-%d"), slots.join(" "))
    }
}
