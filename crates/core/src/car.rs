//! Car listing rules: duplicate identity, partial-update merging, the
//! availability gate on deletion, and price averaging.
//!
//! Pure functions only. The store and the service layer call into these so
//! the rules can be unit tested without any async runtime.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log fields.
pub const ENTITY_CAR: &str = "Car";

pub const DUPLICATE_CAR_MESSAGE: &str =
    "A car with the same make, model, year, and color already exists.";

pub const CAR_NOT_AVAILABLE_MESSAGE: &str = "Cannot delete a car that is not available.";

// ---------------------------------------------------------------------------
// Duplicate identity
// ---------------------------------------------------------------------------

/// The attributes that identify a listing for duplicate detection.
///
/// Two keys match when `year` is equal and `make`, `model` and `color` are
/// equal ignoring case. Price and availability do not participate.
#[derive(Debug, Clone, Copy)]
pub struct ListingKey<'a> {
    pub make: &'a str,
    pub model: &'a str,
    pub year: i32,
    pub color: &'a str,
}

impl ListingKey<'_> {
    pub fn matches(&self, other: &ListingKey<'_>) -> bool {
        self.year == other.year
            && eq_ignore_case(self.make, other.make)
            && eq_ignore_case(self.model, other.model)
            && eq_ignore_case(self.color, other.color)
    }
}

/// Unicode-aware case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

/// Overwrite `current` with `incoming` when it carries a non-empty value.
///
/// `None` and `Some("")` both leave `current` untouched, so a string field
/// can never be cleared through a partial update.
pub fn merge_text(current: &mut String, incoming: Option<&str>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *current = value.to_string();
    }
}

/// Overwrite `current` when `incoming` is present.
pub fn merge_value<T: Copy>(current: &mut T, incoming: Option<T>) {
    if let Some(value) = incoming {
        *current = value;
    }
}

// ---------------------------------------------------------------------------
// Availability gate
// ---------------------------------------------------------------------------

/// A car that is not available may be part of a pending sale and must not be
/// removed.
pub fn ensure_deletable(is_available: bool) -> Result<(), CoreError> {
    if is_available {
        Ok(())
    } else {
        Err(CoreError::InvalidState(CAR_NOT_AVAILABLE_MESSAGE.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Arithmetic mean of `prices`. An empty input yields exactly zero.
///
/// Fails with [`CoreError::Internal`] when the running sum leaves the
/// `Decimal` range.
pub fn average_price<I>(prices: I) -> Result<Decimal, CoreError>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0usize;
    for price in prices {
        sum = sum
            .checked_add(price)
            .ok_or_else(|| CoreError::Internal("price sum overflowed".to_string()))?;
        count += 1;
    }

    if count == 0 {
        return Ok(Decimal::ZERO);
    }
    sum.checked_div(Decimal::from(count))
        .ok_or_else(|| CoreError::Internal("price average overflowed".to_string()))
}
