//! The City record and its validation/mutation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::id::{CityId, StateId};

/// Attributes a client may never overwrite through the update surface.
///
/// Update bodies containing these keys still succeed; the keys are filtered
/// out rather than rejected.
pub const PROTECTED_FIELDS: [&str; 4] = ["id", "state_id", "created_at", "updated_at"];

/// A municipality belonging to exactly one State.
///
/// `id` and `state_id` are assigned at creation and immutable. `created_at`
/// is fixed at creation; `updated_at` moves only when the record is mutated
/// server-side, never from client-supplied data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn new(state_id: StateId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CityId::new(),
            state_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a City from a request-body attribute map merged with the
    /// path-provided `state_id`.
    ///
    /// Construction is permissive: only recognized keys are read, anything
    /// else in the map is ignored. `name` must be present as a string.
    pub fn from_attrs(state_id: StateId, attrs: &Map<String, Value>) -> DomainResult<Self> {
        let name = attrs
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::validation("Missing name"))?;

        Ok(Self::new(state_id, name))
    }

    /// Apply a partial attribute overwrite from an update body.
    ///
    /// Every known mutable field present in the map is copied in; protected
    /// and unknown keys are silently dropped. The record is touched even when
    /// nothing survives the filter, matching the save-always update contract.
    pub fn apply_patch(&mut self, attrs: &Map<String, Value>) {
        for (key, value) in attrs {
            if PROTECTED_FIELDS.contains(&key.as_str()) {
                continue;
            }

            match key.as_str() {
                "name" => {
                    if let Some(name) = value.as_str() {
                        self.name = name.to_string();
                    }
                }
                _ => {}
            }
        }

        self.touch();
    }

    /// Refresh `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
