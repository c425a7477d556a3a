use crate::error::{not_found, ScheduleResult};
use crate::schedule::{BarberProfile, Barbershop};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

/// Storage for barbershops and barber profiles
#[async_trait]
pub trait ScheduleStore: Send + Sync + 'static {
    /// Get a barbershop by id
    async fn get_barbershop(&self, id: &str) -> ScheduleResult<Option<Barbershop>>;

    /// List all barbershops
    async fn list_barbershops(&self) -> ScheduleResult<Vec<Barbershop>>;

    /// Insert or replace a barbershop
    async fn save_barbershop(&self, shop: &Barbershop) -> ScheduleResult<()>;

    /// Get a barber profile by id
    async fn get_barber(&self, id: &str) -> ScheduleResult<Option<BarberProfile>>;

    /// List the barbers attached to a barbershop
    async fn list_barbers_for_shop(&self, barbershop_id: &str)
        -> ScheduleResult<Vec<BarberProfile>>;

    /// Insert or replace a barber profile
    async fn save_barber(&self, barber: &BarberProfile) -> ScheduleResult<()>;
}

/// Serializable contents of a store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub barbershops: Vec<Barbershop>,
    #[serde(default)]
    pub barbers: Vec<BarberProfile>,
}

/// In-memory implementation of the store, optionally backed by a JSON file
#[derive(Debug, Default)]
pub struct InMemoryStore {
    barbershops: RwLock<HashMap<String, Barbershop>>,
    barbers: RwLock<HashMap<String, BarberProfile>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding everything in the snapshot
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            barbershops: RwLock::new(
                snapshot
                    .barbershops
                    .into_iter()
                    .map(|shop| (shop.id.clone(), shop))
                    .collect(),
            ),
            barbers: RwLock::new(
                snapshot
                    .barbers
                    .into_iter()
                    .map(|barber| (barber.id.clone(), barber))
                    .collect(),
            ),
        }
    }

    /// Copy the current contents out, sorted by id so files diff cleanly
    pub async fn snapshot(&self) -> StoreSnapshot {
        let mut barbershops: Vec<Barbershop> =
            self.barbershops.read().await.values().cloned().collect();
        barbershops.sort_by(|a, b| a.id.cmp(&b.id));

        let mut barbers: Vec<BarberProfile> =
            self.barbers.read().await.values().cloned().collect();
        barbers.sort_by(|a, b| a.id.cmp(&b.id));

        StoreSnapshot {
            barbershops,
            barbers,
        }
    }

    /// Load a store from a JSON file; a missing file gives an empty store
    pub async fn load_from_file(path: impl AsRef<Path>) -> ScheduleResult<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            info!("No data file at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let snapshot: StoreSnapshot = serde_json::from_str(&content)?;
        info!(
            "Loaded {} barbershop(s) and {} barber(s) from {}",
            snapshot.barbershops.len(),
            snapshot.barbers.len(),
            path.display()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the current contents to a JSON file
    pub async fn save_to_file(&self, path: impl AsRef<Path>) -> ScheduleResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&self.snapshot().await)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn get_barbershop(&self, id: &str) -> ScheduleResult<Option<Barbershop>> {
        let barbershops = self.barbershops.read().await;
        Ok(barbershops.get(id).cloned())
    }

    async fn list_barbershops(&self) -> ScheduleResult<Vec<Barbershop>> {
        let barbershops = self.barbershops.read().await;
        Ok(barbershops.values().cloned().collect())
    }

    async fn save_barbershop(&self, shop: &Barbershop) -> ScheduleResult<()> {
        let mut barbershops = self.barbershops.write().await;
        barbershops.insert(shop.id.clone(), shop.clone());
        Ok(())
    }

    async fn get_barber(&self, id: &str) -> ScheduleResult<Option<BarberProfile>> {
        let barbers = self.barbers.read().await;
        Ok(barbers.get(id).cloned())
    }

    async fn list_barbers_for_shop(
        &self,
        barbershop_id: &str,
    ) -> ScheduleResult<Vec<BarberProfile>> {
        let barbers = self.barbers.read().await;
        let mut list: Vec<BarberProfile> = barbers
            .values()
            .filter(|barber| barber.barbershop_id == barbershop_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    async fn save_barber(&self, barber: &BarberProfile) -> ScheduleResult<()> {
        let barbershops = self.barbershops.read().await;
        if !barbershops.contains_key(&barber.barbershop_id) {
            return Err(not_found("barbershop", &barber.barbershop_id));
        }
        drop(barbershops);

        let mut barbers = self.barbers.write().await;
        barbers.insert(barber.id.clone(), barber.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::WorkingHours;

    #[tokio::test]
    async fn test_barbers_are_listed_per_shop() {
        let store = InMemoryStore::new();
        let shop = Barbershop::new("owner-1", "Corner Cuts", WorkingHours::default());
        let other = Barbershop::new("owner-2", "Fade Street", WorkingHours::default());
        store.save_barbershop(&shop).await.unwrap();
        store.save_barbershop(&other).await.unwrap();

        store
            .save_barber(&BarberProfile::new(&shop.id, "u1", "Bea"))
            .await
            .unwrap();
        store
            .save_barber(&BarberProfile::new(&shop.id, "u2", "Ahmed"))
            .await
            .unwrap();
        store
            .save_barber(&BarberProfile::new(&other.id, "u3", "Carl"))
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_barbers_for_shop(&shop.id)
            .await
            .unwrap()
            .into_iter()
            .map(|barber| barber.name)
            .collect();
        assert_eq!(names, vec!["Ahmed", "Bea"]);
    }

    #[tokio::test]
    async fn test_barber_needs_existing_shop() {
        let store = InMemoryStore::new();
        let result = store
            .save_barber(&BarberProfile::new("missing", "u1", "Bea"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_snapshot_restores_store() {
        let store = InMemoryStore::new();
        let shop = Barbershop::new("owner-1", "Corner Cuts", WorkingHours::default());
        store.save_barbershop(&shop).await.unwrap();

        let json = serde_json::to_string(&store.snapshot().await).unwrap();
        let restored = InMemoryStore::from_snapshot(serde_json::from_str(&json).unwrap());

        assert_eq!(restored.get_barbershop(&shop.id).await.unwrap(), Some(shop));
        assert_eq!(restored.get_barber("nobody").await.unwrap(), None);
    }
}
