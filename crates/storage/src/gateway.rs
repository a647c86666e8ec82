//! Persistence abstraction consumed by the HTTP handlers.

use geodir_core::{City, CityId, State, StateId};

/// Object store for States and Cities.
///
/// Each operation is individually atomic; callers issue no multi-step
/// transactions across them. Entities move in and out by value: what a
/// handler holds is a transient view, the gateway owns durable state.
pub trait StorageGateway: Send + Sync {
    /// Look up a State by id.
    fn state(&self, id: StateId) -> Option<State>;

    /// All States, in creation order.
    fn states(&self) -> Vec<State>;

    /// Durably write the State's current in-memory view (insert or replace).
    fn persist_state(&self, state: State);

    /// Remove a State and, cascading, every City it owns. Terminal.
    fn delete_state(&self, id: StateId);

    /// Look up a City by id.
    fn city(&self, id: CityId) -> Option<City>;

    /// Relationship traversal: the Cities owned by a State, in creation order.
    fn cities_of(&self, state_id: StateId) -> Vec<City>;

    /// Durably write the City's current in-memory view (insert or replace).
    fn persist_city(&self, city: City);

    /// Remove a City. Terminal.
    fn delete_city(&self, id: CityId);

    /// Flush pending durable writes.
    ///
    /// `persist_*` is autosave (each call is individually durable), so this
    /// exists for backends that buffer; the in-memory store treats it as a
    /// no-op.
    fn save(&self);
}
