//! Car listing business rules.
//!
//! Enforces duplicate detection on create, partial-field merging on update,
//! the availability gate on delete, and the average-price aggregate. Storage
//! is delegated to [`CarRepo`](carlot_db::repositories::CarRepo).
//!
//! Read-then-write sequences here are not atomic with respect to other
//! callers: two concurrent creates of the same listing can both pass the
//! duplicate check, and concurrent updates of one id are last-write-wins on
//! the whole record.

use carlot_core::car::{self, DUPLICATE_CAR_MESSAGE, ENTITY_CAR};
use carlot_core::error::CoreError;
use carlot_core::types::DbId;
use carlot_db::models::car::{Car, CreateCar, UpdateCar};
use carlot_db::CarStore;
use rust_decimal::Decimal;
use validator::Validate;

pub struct CarService {
    store: CarStore,
}

impl CarService {
    pub fn new(store: CarStore) -> Self {
        Self { store }
    }

    pub async fn list_cars(&self) -> Vec<Car> {
        self.store.find_all().await
    }

    pub async fn get_car(&self, id: DbId) -> Option<Car> {
        self.store.find_by_id(id).await
    }

    /// Create a listing unless an equivalent one already exists.
    ///
    /// Equivalence is `(make, model, year, color)` with case-insensitive
    /// string comparison. Fails with [`CoreError::Conflict`] on a duplicate.
    pub async fn create_car(&self, input: CreateCar) -> Result<Car, CoreError> {
        validate_input(&input)?;

        let incoming = input.listing_key();
        let existing = self.store.find_all().await;
        if existing
            .iter()
            .any(|car| car.listing_key().matches(&incoming))
        {
            tracing::warn!(
                make = %input.make,
                model = %input.model,
                year = input.year,
                color = %input.color,
                "Attempted to create duplicate car",
            );
            return Err(CoreError::Conflict(DUPLICATE_CAR_MESSAGE.to_string()));
        }

        let car = self.store.create(&input).await;
        tracing::info!(car_id = car.id, "Car created");
        Ok(car)
    }

    /// Apply a partial update. Returns `Ok(None)` when the car does not exist.
    ///
    /// Fields that are `None` (or empty strings) keep their stored value.
    pub async fn update_car(&self, id: DbId, input: UpdateCar) -> Result<Option<Car>, CoreError> {
        validate_input(&input)?;

        let Some(mut merged) = self.store.find_by_id(id).await else {
            return Ok(None);
        };

        car::merge_text(&mut merged.make, input.make.as_deref());
        car::merge_text(&mut merged.model, input.model.as_deref());
        car::merge_value(&mut merged.year, input.year);
        car::merge_text(&mut merged.color, input.color.as_deref());
        car::merge_value(&mut merged.price, input.price);
        car::merge_value(&mut merged.is_available, input.is_available);

        let updated = self.store.update(id, merged).await;
        if updated.is_some() {
            tracing::info!(car_id = id, "Car updated");
        } else {
            tracing::warn!(car_id = id, "Car disappeared before update was stored");
        }
        Ok(updated)
    }

    /// Delete an available car. Returns `Ok(false)` when the car does not
    /// exist and [`CoreError::InvalidState`] when it is not available.
    pub async fn delete_car(&self, id: DbId) -> Result<bool, CoreError> {
        let Some(existing) = self.store.find_by_id(id).await else {
            return Ok(false);
        };

        if let Err(err) = car::ensure_deletable(existing.is_available) {
            tracing::warn!(car_id = id, "Attempted to delete unavailable car");
            return Err(err);
        }

        let deleted = self.store.delete(id).await;
        if deleted {
            tracing::info!(car_id = id, "Car deleted");
        }
        Ok(deleted)
    }

    /// Flag a car as no longer available. Returns `None` when it does not exist.
    pub async fn mark_unavailable(&self, id: DbId) -> Option<Car> {
        let mut car = self.store.find_by_id(id).await?;
        car.is_available = false;

        let updated = self.store.update(id, car).await;
        if updated.is_some() {
            tracing::info!(car_id = id, "Car marked as unavailable");
        }
        updated
    }

    pub async fn list_by_make(&self, make: Option<&str>) -> Vec<Car> {
        self.store.find_by_make(make).await
    }

    pub async fn list_available(&self) -> Vec<Car> {
        self.store.find_available().await
    }

    /// Mean price over all cars; exactly zero when there are none.
    ///
    /// Fails with [`CoreError::Internal`] if the prices sum past the
    /// `Decimal` range.
    pub async fn average_price(&self) -> Result<Decimal, CoreError> {
        let cars = self.store.find_all().await;
        car::average_price(cars.iter().map(|c| c.price)).inspect_err(|err| {
            tracing::error!(car_count = cars.len(), error = %err, "Average price failed");
        })
    }

    pub async fn car_count(&self) -> usize {
        self.store.count().await
    }
}

/// Run the DTO's field validators, mapping failures to [`CoreError::Validation`].
fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        tracing::debug!(entity = ENTITY_CAR, %errors, "Rejected invalid input");
        CoreError::Validation(errors.to_string())
    })
}
