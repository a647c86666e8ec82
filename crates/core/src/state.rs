//! The State record (parent resource of City).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::id::StateId;

/// Attributes a client may never overwrite on a State.
pub const PROTECTED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Parent resource one level above City; owns zero or more Cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: StateId::new(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a State from a request-body attribute map. Same permissive
    /// policy as [`crate::City::from_attrs`].
    pub fn from_attrs(attrs: &Map<String, Value>) -> DomainResult<Self> {
        let name = attrs
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::validation("Missing name"))?;

        Ok(Self::new(name))
    }

    /// Apply a partial attribute overwrite, filtering protected keys.
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

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creation_requires_name() {
        let body = json!({ "capital": "Boston" });
        let err = State::from_attrs(body.as_object().unwrap()).unwrap_err();
        assert_eq!(err, DomainError::validation("Missing name"));
    }

    #[test]
    fn patch_keeps_identity() {
        let mut state = State::new("Massachusetts");
        let original_id = state.id;

        let body = json!({ "id": "forged", "name": "Kansas" });
        state.apply_patch(body.as_object().unwrap());

        assert_eq!(state.id, original_id);
        assert_eq!(state.name, "Kansas");
    }
}
