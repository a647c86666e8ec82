use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use geodir_core::{State, StateId};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub async fn list_states(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.states_list())).into_response()
}

pub async fn get_state(
    Extension(services): Extension<Arc<AppServices>>,
    Path(state_id): Path<String>,
) -> axum::response::Response {
    let state_id: StateId = match common::parse_id(&state_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.state_get(state_id) {
        Some(state) => (StatusCode::OK, Json(state)).into_response(),
        None => errors::not_found(),
    }
}

/// Deletes a State and, cascading, every City it owns.
pub async fn delete_state(
    Extension(services): Extension<Arc<AppServices>>,
    Path(state_id): Path<String>,
) -> axum::response::Response {
    let state_id: StateId = match common::parse_id(&state_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if services.state_get(state_id).is_none() {
        return errors::not_found();
    }

    services.delete_state(state_id);
    services.flush();
    tracing::info!(%state_id, "deleted state");

    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}

pub async fn create_state(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let attrs = match common::parse_json_object(&body) {
        Ok(map) => map,
        Err(resp) => return resp,
    };

    let state = match State::from_attrs(&attrs) {
        Ok(state) => state,
        Err(err) => return errors::domain_error_to_response(err),
    };

    services.persist_state(state.clone());
    tracing::info!(state_id = %state.id, "created state");

    (StatusCode::CREATED, Json(state)).into_response()
}

pub async fn update_state(
    Extension(services): Extension<Arc<AppServices>>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let state_id: StateId = match common::parse_id(&state_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut state = match services.state_get(state_id) {
        Some(state) => state,
        None => return errors::not_found(),
    };

    let attrs = match common::parse_json_object(&body) {
        Ok(map) => map,
        Err(resp) => return resp,
    };

    state.apply_patch(&attrs);
    services.persist_state(state.clone());

    (StatusCode::OK, Json(state)).into_response()
}
