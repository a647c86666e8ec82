use axum::routing::{get, MethodRouter};
use axum::Router;

pub mod cities;
pub mod common;
pub mod states;
pub mod system;

/// Register a route under both its plain and trailing-slash spelling;
/// trailing slashes are optional everywhere on this API.
fn route_slashless(router: Router, path: &str, method_router: MethodRouter) -> Router {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Router for all resource endpoints.
pub fn router() -> Router {
    let mut router = Router::new();

    let table: [(&str, MethodRouter); 4] = [
        (
            "/states",
            get(states::list_states).post(states::create_state),
        ),
        (
            "/states/:state_id",
            get(states::get_state)
                .put(states::update_state)
                .delete(states::delete_state),
        ),
        (
            "/states/:state_id/cities",
            get(cities::list_cities).post(cities::create_city),
        ),
        (
            "/cities/:city_id",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        ),
    ];

    for (path, method_router) in table {
        router = route_slashless(router, path, method_router);
    }

    router
}
