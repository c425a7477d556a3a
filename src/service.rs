use crate::error::{not_found, schedule_error, Error, ScheduleResult};
use crate::schedule::{
    generate_available_time_slots, generate_weekly_availability,
    get_effective_barber_working_hours, resolve_day, validate_barber_working_hours,
    BarberProfile, Barbershop, CustomWorkingHours, DaySchedule, Weekday, WorkingHours,
};
use crate::store::ScheduleStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

/// Editor and booking operations on top of a store
pub struct HoursService<S: ScheduleStore> {
    store: Arc<S>,
    default_hours: WorkingHours,
}

impl<S: ScheduleStore> Clone for HoursService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_hours: self.default_hours.clone(),
        }
    }
}

impl<S: ScheduleStore> HoursService<S> {
    /// Create a service whose new barbershops start with the standard week
    pub fn new(store: Arc<S>) -> Self {
        Self::with_default_hours(store, WorkingHours::default_week())
    }

    /// Create a service whose new barbershops start with `default_hours`
    pub fn with_default_hours(store: Arc<S>, default_hours: WorkingHours) -> Self {
        Self {
            store,
            default_hours,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Onboard a new barbershop with the default week
    pub async fn create_barbershop(
        &self,
        owner_id: &str,
        name: &str,
        address: &str,
        phone: &str,
    ) -> ScheduleResult<Barbershop> {
        let mut shop = Barbershop::new(owner_id, name, self.default_hours.clone());
        shop.address = address.to_string();
        shop.phone = phone.to_string();

        self.store.save_barbershop(&shop).await?;
        info!("Created barbershop {} ({})", shop.name, shop.id);
        Ok(shop)
    }

    /// Replace a barbershop's whole week
    pub async fn update_barbershop_hours(
        &self,
        shop_id: &str,
        hours: WorkingHours,
    ) -> ScheduleResult<Barbershop> {
        for (day, schedule) in hours.iter() {
            check_day(day, schedule)?;
        }

        let mut shop = self.require_barbershop(shop_id).await?;
        shop.working_hours = hours;
        self.store.save_barbershop(&shop).await?;
        info!("Updated working hours for barbershop {}", shop.id);
        Ok(shop)
    }

    /// Change a single day of a barbershop's week
    pub async fn update_barbershop_day(
        &self,
        shop_id: &str,
        day: Weekday,
        schedule: DaySchedule,
    ) -> ScheduleResult<Barbershop> {
        check_day(day, &schedule)?;

        let mut shop = self.require_barbershop(shop_id).await?;
        shop.working_hours.set(day, schedule);
        self.store.save_barbershop(&shop).await?;
        info!("Updated {} hours for barbershop {}", day, shop.id);
        Ok(shop)
    }

    /// Attach a new barber to a barbershop
    pub async fn add_barber(
        &self,
        shop_id: &str,
        user_id: &str,
        name: &str,
    ) -> ScheduleResult<BarberProfile> {
        let shop = self.require_barbershop(shop_id).await?;
        let barber = BarberProfile::new(&shop.id, user_id, name);

        self.store.save_barber(&barber).await?;
        info!("Added barber {} to barbershop {}", barber.name, shop.id);
        Ok(barber)
    }

    /// Save a barber's custom hours after checking them against the barbershop's hours.
    ///
    /// On violation nothing is saved and every message is returned in `Error::Validation`.
    /// Empty custom hours clear the override entirely.
    pub async fn update_barber_working_hours(
        &self,
        barber_id: &str,
        custom: CustomWorkingHours,
    ) -> ScheduleResult<BarberProfile> {
        for (day, schedule) in custom.iter() {
            check_day(day, schedule)?;
        }

        let mut barber = self.require_barber(barber_id).await?;
        let shop = self.require_barbershop(&barber.barbershop_id).await?;

        let result = validate_barber_working_hours(&custom, &shop.working_hours);
        if !result.is_valid {
            warn!(
                "Rejected working hours for barber {}: {}",
                barber.id,
                result.errors.join("; ")
            );
        }
        result.into_result()?;

        barber.custom_working_hours = if custom.is_empty() {
            None
        } else {
            Some(custom)
        };
        self.store.save_barber(&barber).await?;
        info!("Updated custom working hours for barber {}", barber.id);
        Ok(barber)
    }

    /// Set or clear one day of a barber's custom hours, keeping the other days
    pub async fn update_barber_day(
        &self,
        barber_id: &str,
        day: Weekday,
        schedule: Option<DaySchedule>,
    ) -> ScheduleResult<BarberProfile> {
        let barber = self.require_barber(barber_id).await?;
        let mut custom = barber.custom_working_hours.unwrap_or_default();
        custom.set(day, schedule);
        self.update_barber_working_hours(barber_id, custom).await
    }

    /// A barber's effective week
    pub async fn effective_hours(&self, barber_id: &str) -> ScheduleResult<WorkingHours> {
        let barber = self.require_barber(barber_id).await?;
        let shop = self.require_barbershop(&barber.barbershop_id).await?;
        Ok(get_effective_barber_working_hours(
            &barber,
            &shop.working_hours,
        ))
    }

    /// Bookable start times at a barbershop, for one barber or the shop itself.
    ///
    /// An unknown shop or barber gives an empty list rather than an error.
    pub async fn available_slots(
        &self,
        shop_id: &str,
        barber_id: Option<&str>,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<String>> {
        match self.hours_for(shop_id, barber_id).await? {
            Some(hours) => Ok(generate_available_time_slots(&hours, date)),
            None => Ok(Vec::new()),
        }
    }

    /// Bookable start times for each day of the week containing `date`
    pub async fn weekly_availability(
        &self,
        shop_id: &str,
        barber_id: Option<&str>,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<(NaiveDate, Vec<String>)>> {
        let hours = self
            .hours_for(shop_id, barber_id)
            .await?
            .unwrap_or_else(|| WorkingHours::from_fn(|_| DaySchedule::closed()));
        Ok(generate_weekly_availability(&hours, date))
    }

    /// One display line per day, marking days where the barber's own hours apply
    pub async fn weekly_summary(
        &self,
        shop_id: &str,
        barber_id: Option<&str>,
    ) -> ScheduleResult<Vec<String>> {
        let shop = self.require_barbershop(shop_id).await?;
        let barber = match barber_id {
            Some(id) => Some(self.require_barber(id).await?),
            None => None,
        };
        let custom = barber
            .as_ref()
            .and_then(|barber| barber.custom_working_hours.as_ref());

        Ok(Weekday::ALL
            .into_iter()
            .map(|day| {
                let resolved = resolve_day(custom, &shop.working_hours, day);
                let marker = if resolved.is_override() { " *" } else { "" };
                format!("{:<10} {}{}", day, resolved.schedule().format(), marker)
            })
            .collect())
    }

    async fn hours_for(
        &self,
        shop_id: &str,
        barber_id: Option<&str>,
    ) -> ScheduleResult<Option<WorkingHours>> {
        let Some(shop) = self.store.get_barbershop(shop_id).await? else {
            warn!("No barbershop {}, no availability", shop_id);
            return Ok(None);
        };

        let Some(barber_id) = barber_id else {
            return Ok(Some(shop.working_hours));
        };

        match self.store.get_barber(barber_id).await? {
            Some(barber) if barber.barbershop_id == shop.id => Ok(Some(
                get_effective_barber_working_hours(&barber, &shop.working_hours),
            )),
            _ => {
                warn!(
                    "No barber {} at barbershop {}, no availability",
                    barber_id, shop_id
                );
                Ok(None)
            }
        }
    }

    async fn require_barbershop(&self, id: &str) -> ScheduleResult<Barbershop> {
        self.store
            .get_barbershop(id)
            .await?
            .ok_or_else(|| not_found("barbershop", id))
    }

    async fn require_barber(&self, id: &str) -> ScheduleResult<BarberProfile> {
        self.store
            .get_barber(id)
            .await?
            .ok_or_else(|| not_found("barber", id))
    }
}

fn check_day(day: Weekday, schedule: &DaySchedule) -> ScheduleResult<()> {
    schedule.check_invariants().map_err(|e| match e {
        Error::InvalidSchedule(message) => schedule_error(format!("{}: {}", day, message)),
        other => other,
    })
}
