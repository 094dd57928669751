//! Car record and request DTOs.

use carlot_core::car::ListingKey;
use carlot_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored car listing.
///
/// `id` and `created_at` are assigned by the store and never change.
/// `updated_at` stays `None` until the first successful update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Car {
    pub fn listing_key(&self) -> ListingKey<'_> {
        ListingKey {
            make: &self.make,
            model: &self.model,
            year: self.year,
            color: &self.color,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new car listing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCar {
    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub make: String,
    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub color: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    /// New listings are available unless the caller says otherwise.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

impl CreateCar {
    pub fn listing_key(&self) -> ListingKey<'_> {
        ListingKey {
            make: &self.make,
            model: &self.model,
            year: self.year,
            color: &self.color,
        }
    }
}

/// DTO for a partial update. `None` means "leave unchanged".
///
/// An empty string is also treated as "leave unchanged", so string fields
/// cannot be cleared through this DTO. Whitespace-only strings are rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCar {
    #[validate(length(max = 50), custom(function = "validate_not_whitespace_only"))]
    pub make: Option<String>,
    #[validate(length(max = 50), custom(function = "validate_not_whitespace_only"))]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,
    #[validate(length(max = 20), custom(function = "validate_not_whitespace_only"))]
    pub color: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

fn default_available() -> bool {
    true
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Like [`validate_not_blank`] but lets the empty string through, since an
/// update treats it as "no change".
fn validate_not_whitespace_only(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("price").with_message("must be greater than 0".into()));
    }
    Ok(())
}
