//! In-memory storage for car listings.
//!
//! The store is the only owner of record state. Callers share it behind an
//! `Arc` and every operation takes `&self`.

use std::sync::Arc;

pub mod models;
pub mod repositories;
pub mod seed;

use repositories::CarRepo;

/// Shared handle to the car store.
pub type CarStore = Arc<CarRepo>;

/// Build the store, optionally pre-populated with the demo catalog.
pub fn create_store(seed_catalog: bool) -> CarStore {
    let repo = if seed_catalog {
        CarRepo::seeded()
    } else {
        CarRepo::new()
    };
    tracing::debug!(seed_catalog, "Car store created");
    Arc::new(repo)
}
