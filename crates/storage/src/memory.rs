//! In-memory Storage Gateway for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use geodir_core::{City, CityId, State, StateId};

use crate::gateway::StorageGateway;

/// In-memory object store.
///
/// UUIDv7 ids are time-ordered, so sorting by id yields creation order for
/// both the state listing and the relationship traversal.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    states: RwLock<HashMap<StateId, State>>,
    cities: RwLock<HashMap<CityId, City>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageGateway for InMemoryStorage {
    fn state(&self, id: StateId) -> Option<State> {
        let map = self.states.read().ok()?;
        map.get(&id).cloned()
    }

    fn states(&self) -> Vec<State> {
        let map = match self.states.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut all: Vec<State> = map.values().cloned().collect();
        all.sort_by_key(|s| *s.id.as_uuid());
        all
    }

    fn persist_state(&self, state: State) {
        if let Ok(mut map) = self.states.write() {
            map.insert(state.id, state);
        }
    }

    fn delete_state(&self, id: StateId) {
        if let Ok(mut map) = self.states.write() {
            map.remove(&id);
        }

        // Cascade: a City never outlives its owning State.
        if let Ok(mut map) = self.cities.write() {
            map.retain(|_, city| city.state_id != id);
        }
    }

    fn city(&self, id: CityId) -> Option<City> {
        let map = self.cities.read().ok()?;
        map.get(&id).cloned()
    }

    fn cities_of(&self, state_id: StateId) -> Vec<City> {
        let map = match self.cities.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut owned: Vec<City> = map
            .values()
            .filter(|city| city.state_id == state_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| *c.id.as_uuid());
        owned
    }

    fn persist_city(&self, city: City) {
        if let Ok(mut map) = self.cities.write() {
            map.insert(city.id, city);
        }
    }

    fn delete_city(&self, id: CityId) {
        if let Ok(mut map) = self.cities.write() {
            map.remove(&id);
        }
    }

    fn save(&self) {
        // Writes above are already durable for this backend.
        tracing::debug!("storage flush requested (no-op for in-memory)");
    }
}
