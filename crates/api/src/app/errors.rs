use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use geodir_core::DomainError;

/// 400 with the `{"error": <reason>}` body shape every bad request uses.
pub fn bad_request(reason: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": reason.into() })),
    )
        .into_response()
}

/// 404 with an empty body (framework-default not-found semantics).
pub fn not_found() -> axum::response::Response {
    StatusCode::NOT_FOUND.into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(reason) => bad_request(reason),
        // An id that does not parse resolves nothing, same as an unknown id.
        DomainError::InvalidId(_) | DomainError::NotFound => not_found(),
    }
}
