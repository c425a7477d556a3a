use barbershop_hours::config::Config;
use barbershop_hours::schedule::{Weekday, WorkingHours};
use barbershop_hours::service::HoursService;
use barbershop_hours::store::{InMemoryStore, ScheduleStore};
use std::sync::Arc;

/// Smoke test to verify that a default config can be built
#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.data_file, "data/barbershops.json");
    assert_eq!(config.default_hours, WorkingHours::default_week());
}

/// New barbershops start with the configured default week
#[tokio::test]
async fn test_service_uses_configured_default_hours() {
    let mut default_hours = WorkingHours::default_week();
    default_hours.sunday = default_hours.saturday.clone();

    let service = HoursService::with_default_hours(Arc::new(InMemoryStore::new()), default_hours);
    let shop = service
        .create_barbershop("owner-1", "Open Sundays", "", "")
        .await
        .unwrap();
    assert!(shop.working_hours.get(Weekday::Sunday).is_open);
}

/// Data survives a save and reload through a JSON file
#[tokio::test]
async fn test_store_file_round_trip() {
    let path = std::env::temp_dir().join(format!("barbershops-{}.json", uuid::Uuid::new_v4()));

    let store = Arc::new(InMemoryStore::new());
    let service = HoursService::new(Arc::clone(&store));
    let shop = service
        .create_barbershop("owner-1", "Corner Cuts", "Main St 1", "555-0100")
        .await
        .unwrap();
    let barber = service.add_barber(&shop.id, "user-1", "Bea").await.unwrap();
    store.save_to_file(&path).await.unwrap();

    let reloaded = InMemoryStore::load_from_file(&path).await.unwrap();
    assert_eq!(reloaded.get_barbershop(&shop.id).await.unwrap(), Some(shop));
    assert_eq!(reloaded.get_barber(&barber.id).await.unwrap(), Some(barber));

    let _ = std::fs::remove_file(&path);
}

/// A missing data file is an empty store, not an error
#[tokio::test]
async fn test_missing_data_file() {
    let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
    let store = InMemoryStore::load_from_file(&path).await.unwrap();
    assert!(store.list_barbershops().await.unwrap().is_empty());
}
