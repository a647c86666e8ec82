//! `geodir-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no HTTP or storage concerns):
//! typed identifiers, the State and City records, and their
//! validation/mutation rules.

pub mod city;
pub mod error;
pub mod id;
pub mod state;

pub use city::City;
pub use error::{DomainError, DomainResult};
pub use id::{CityId, StateId};
pub use state::State;
