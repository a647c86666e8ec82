use std::str::FromStr;

use axum::body::Bytes;
use serde_json::{Map, Value};

use crate::app::errors;

/// Decode a request body as a JSON object.
///
/// The body is read as raw bytes so the `Not a JSON` error shape stays under
/// our control instead of the framework's. Parse failures, empty bodies, and
/// non-object JSON (arrays, strings, numbers) all land here.
pub fn parse_json_object(body: &Bytes) -> Result<Map<String, Value>, axum::response::Response> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(errors::bad_request("Not a JSON")),
    }
}

/// Parse a path parameter into a typed id.
///
/// A malformed id cannot resolve to any resource, so it surfaces as 404
/// rather than 400.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, axum::response::Response> {
    raw.parse::<T>().map_err(|_| errors::not_found())
}
