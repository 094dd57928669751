//! In-memory repository for car listings.
//!
//! A single `RwLock` guards both the record map and the id counter, so id
//! assignment is serialized with inserts and can neither collide nor skip.
//! Reads return cloned snapshots; no lock is held once a method returns.

use std::collections::HashMap;

use carlot_core::car::eq_ignore_case;
use carlot_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::models::car::{Car, CreateCar};
use crate::seed;

/// First id handed out by an empty store.
const FIRST_ID: DbId = 1;

struct CarTable {
    cars: HashMap<DbId, Car>,
    /// Next id to assign. Only ever incremented, so ids of deleted records
    /// are never reused.
    next_id: DbId,
}

impl CarTable {
    fn new() -> Self {
        Self {
            cars: HashMap::new(),
            next_id: FIRST_ID,
        }
    }

    fn insert(&mut self, input: &CreateCar, now: Timestamp) -> Car {
        let id = self.next_id;
        self.next_id += 1;

        let car = Car {
            id,
            make: input.make.clone(),
            model: input.model.clone(),
            year: input.year,
            color: input.color.clone(),
            price: input.price,
            is_available: input.is_available,
            created_at: now,
            updated_at: None,
        };
        self.cars.insert(id, car.clone());
        car
    }

    fn collect_where(&self, predicate: impl Fn(&Car) -> bool) -> Vec<Car> {
        let mut cars: Vec<Car> = self
            .cars
            .values()
            .filter(|car| predicate(car))
            .cloned()
            .collect();
        cars.sort_by_key(|car| car.id);
        cars
    }
}

/// Provides storage operations for car listings.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct CarRepo {
    table: RwLock<CarTable>,
}

impl CarRepo {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(CarTable::new()),
        }
    }

    /// Create a store pre-populated with [`seed::catalog`] (ids 1..=5).
    pub fn seeded() -> Self {
        let now = chrono::Utc::now();
        let mut table = CarTable::new();
        for listing in seed::catalog() {
            table.insert(&listing, now);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// All records, ordered by id.
    pub async fn find_all(&self) -> Vec<Car> {
        self.table.read().await.collect_where(|_| true)
    }

    /// Point lookup. `None` when no record has this id.
    pub async fn find_by_id(&self, id: DbId) -> Option<Car> {
        self.table.read().await.cars.get(&id).cloned()
    }

    /// Insert a new record, assigning the next id and stamping `created_at`.
    pub async fn create(&self, input: &CreateCar) -> Car {
        let car = self.table.write().await.insert(input, chrono::Utc::now());
        tracing::debug!(car_id = car.id, "Car inserted");
        car
    }

    /// Replace the mutable fields of an existing record.
    ///
    /// `id` and `created_at` are taken from the stored record regardless of
    /// what `car` carries; `updated_at` is set to now. Returns `None` without
    /// inserting anything when `id` is unknown.
    pub async fn update(&self, id: DbId, car: Car) -> Option<Car> {
        let mut table = self.table.write().await;
        let existing = table.cars.get_mut(&id)?;

        *existing = Car {
            id,
            created_at: existing.created_at,
            updated_at: Some(chrono::Utc::now()),
            ..car
        };
        Some(existing.clone())
    }

    /// Remove a record. Returns `true` if a record was removed.
    pub async fn delete(&self, id: DbId) -> bool {
        self.table.write().await.cars.remove(&id).is_some()
    }

    /// Case-insensitive exact match on `make`.
    ///
    /// Absent, empty or whitespace-only input matches nothing.
    pub async fn find_by_make(&self, make: Option<&str>) -> Vec<Car> {
        let Some(make) = make.filter(|m| !m.trim().is_empty()) else {
            return Vec::new();
        };
        self.table
            .read()
            .await
            .collect_where(|car| eq_ignore_case(&car.make, make))
    }

    /// Records with `is_available == true`.
    pub async fn find_available(&self) -> Vec<Car> {
        self.table.read().await.collect_where(|car| car.is_available)
    }

    /// Number of live records.
    pub async fn count(&self) -> usize {
        self.table.read().await.cars.len()
    }
}

impl Default for CarRepo {
    fn default() -> Self {
        Self::new()
    }
}
