//! Route definitions for the car inventory.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Car routes mounted at `/cars`.
///
/// ```text
/// GET    /                      -> list_cars
/// POST   /                      -> create_car
/// GET    /available             -> list_available
/// GET    /average-price         -> average_price
/// GET    /make/{make}           -> list_by_make
/// GET    /{id}                  -> get_car
/// PUT    /{id}                  -> update_car
/// DELETE /{id}                  -> delete_car
/// PATCH  /{id}/unavailable      -> mark_unavailable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list_cars).post(cars::create_car))
        .route("/available", get(cars::list_available))
        .route("/average-price", get(cars::average_price))
        .route("/make/{make}", get(cars::list_by_make))
        .route(
            "/{id}",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .route("/{id}/unavailable", patch(cars::mark_unavailable))
}
