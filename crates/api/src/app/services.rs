use std::sync::Arc;

use geodir_core::{City, CityId, State, StateId};
use geodir_storage::{InMemoryStorage, StorageGateway};

/// Application services handed to every handler via `Extension`.
///
/// Thin delegation over the Storage Gateway; constructor injection keeps the
/// handlers testable against a fake gateway.
pub struct AppServices {
    storage: Arc<dyn StorageGateway>,
}

impl AppServices {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    pub fn state_get(&self, id: StateId) -> Option<State> {
        self.storage.state(id)
    }

    pub fn states_list(&self) -> Vec<State> {
        self.storage.states()
    }

    pub fn persist_state(&self, state: State) {
        self.storage.persist_state(state);
    }

    pub fn delete_state(&self, id: StateId) {
        self.storage.delete_state(id);
    }

    pub fn city_get(&self, id: CityId) -> Option<City> {
        self.storage.city(id)
    }

    pub fn cities_for_state(&self, state_id: StateId) -> Vec<City> {
        self.storage.cities_of(state_id)
    }

    pub fn persist_city(&self, city: City) {
        self.storage.persist_city(city);
    }

    pub fn delete_city(&self, id: CityId) {
        self.storage.delete_city(id);
    }

    /// Flush the gateway's durable state (delete paths call this).
    pub fn flush(&self) {
        self.storage.save();
    }
}

/// Default wiring: the in-memory Storage Gateway.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryStorage::new()))
}
