use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::CarService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Business rules over the car store.
    pub cars: Arc<CarService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
