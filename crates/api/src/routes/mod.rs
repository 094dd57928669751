pub mod cars;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Prefix under which [`api_routes`] is mounted.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cars                          list, create
/// /cars/available                available cars only
/// /cars/average-price            mean price over all cars
/// /cars/make/{make}              cars by make (case-insensitive)
/// /cars/{id}                     get, update, delete
/// /cars/{id}/unavailable         mark unavailable (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Car inventory.
        .nest("/cars", cars::router())
}
