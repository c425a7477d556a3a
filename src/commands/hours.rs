use super::CommandOutcome;
use barbershop_hours::error::ScheduleResult;
use barbershop_hours::schedule::{DaySchedule, Weekday};
use barbershop_hours::service::HoursService;
use barbershop_hours::store::ScheduleStore;

pub async fn create_shop<S: ScheduleStore>(
    service: &HoursService<S>,
    owner: &str,
    name: &str,
    address: &str,
    phone: &str,
) -> ScheduleResult<CommandOutcome> {
    let shop = service.create_barbershop(owner, name, address, phone).await?;
    Ok(CommandOutcome::changed(format!(
        "Created barbershop {} with id {}",
        shop.name, shop.id
    )))
}

pub async fn add_barber<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
    user_id: &str,
    name: &str,
) -> ScheduleResult<CommandOutcome> {
    let barber = service.add_barber(shop_id, user_id, name).await?;
    Ok(CommandOutcome::changed(format!(
        "Added barber {} with id {}",
        barber.name, barber.id
    )))
}

pub async fn set_shop_day<S: ScheduleStore>(
    service: &HoursService<S>,
    shop_id: &str,
    day: Weekday,
    schedule: DaySchedule,
) -> ScheduleResult<CommandOutcome> {
    let shop = service.update_barbershop_day(shop_id, day, schedule).await?;
    Ok(CommandOutcome::changed(format!(
        "{} {}: {}",
        shop.name,
        day,
        shop.working_hours.get(day).format()
    )))
}

/// Set, close or clear (`None`) one day of a barber's hours
pub async fn set_barber_day<S: ScheduleStore>(
    service: &HoursService<S>,
    barber_id: &str,
    day: Weekday,
    schedule: Option<DaySchedule>,
) -> ScheduleResult<CommandOutcome> {
    let barber = service.update_barber_day(barber_id, day, schedule).await?;
    let line = match barber
        .custom_working_hours
        .as_ref()
        .and_then(|custom| custom.get(day))
    {
        Some(schedule) => format!("{} {}: {}", barber.name, day, schedule.format()),
        None => format!("{} {}: same as the barbershop", barber.name, day),
    };
    Ok(CommandOutcome::changed(line))
}
