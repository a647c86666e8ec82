//! `geodir-storage` — the Storage Gateway.
//!
//! Object persistence for the directory: lookup by type and id, durable
//! writes, deletion, and the State → City relationship traversal. Handlers
//! depend on the [`StorageGateway`] trait only; the in-memory implementation
//! backs dev and tests.

pub mod gateway;
pub mod memory;

pub use gateway::StorageGateway;
pub use memory::InMemoryStorage;
