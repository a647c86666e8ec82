use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use geodir_core::{City, CityId, StateId};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

/// Retrieves the list of all City objects owned by a State.
pub async fn list_cities(
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

    let cities = services.cities_for_state(state_id);
    (StatusCode::OK, Json(cities)).into_response()
}

/// Retrieves a City object by its id.
pub async fn get_city(
    Extension(services): Extension<Arc<AppServices>>,
    Path(city_id): Path<String>,
) -> axum::response::Response {
    let city_id: CityId = match common::parse_id(&city_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.city_get(city_id) {
        Some(city) => (StatusCode::OK, Json(city)).into_response(),
        None => errors::not_found(),
    }
}

/// Deletes a City object by its id.
pub async fn delete_city(
    Extension(services): Extension<Arc<AppServices>>,
    Path(city_id): Path<String>,
) -> axum::response::Response {
    let city_id: CityId = match common::parse_id(&city_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if services.city_get(city_id).is_none() {
        return errors::not_found();
    }

    services.delete_city(city_id);
    services.flush();
    tracing::info!(%city_id, "deleted city");

    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}

/// Creates a City under a State.
///
/// Parent existence is checked before the body is touched, so a malformed
/// body against an unknown State yields 404, not 400. The path-provided
/// `state_id` overrides anything in the body.
pub async fn create_city(
    Extension(services): Extension<Arc<AppServices>>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let state_id: StateId = match common::parse_id(&state_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if services.state_get(state_id).is_none() {
        return errors::not_found();
    }

    let attrs = match common::parse_json_object(&body) {
        Ok(map) => map,
        Err(resp) => return resp,
    };

    let city = match City::from_attrs(state_id, &attrs) {
        Ok(city) => city,
        Err(err) => return errors::domain_error_to_response(err),
    };

    services.persist_city(city.clone());
    tracing::info!(city_id = %city.id, %state_id, "created city");

    (StatusCode::CREATED, Json(city)).into_response()
}

/// Updates a City object by its id (partial attribute merge).
///
/// Protected fields in the body are filtered out, never rejected.
pub async fn update_city(
    Extension(services): Extension<Arc<AppServices>>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let city_id: CityId = match common::parse_id(&city_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut city = match services.city_get(city_id) {
        Some(city) => city,
        None => return errors::not_found(),
    };

    let attrs = match common::parse_json_object(&body) {
        Ok(map) => map,
        Err(resp) => return resp,
    };

    city.apply_patch(&attrs);
    services.persist_city(city.clone());

    (StatusCode::OK, Json(city)).into_response()
}
