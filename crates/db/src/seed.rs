//! Fixed demo catalog loaded into a fresh store.
//!
//! Ids are assigned in order, so the catalog always occupies ids 1..=5 and
//! the Ford Mustang (id 3) is the only unavailable listing.

use rust_decimal::Decimal;

use crate::models::car::CreateCar;

pub fn catalog() -> Vec<CreateCar> {
    vec![
        listing("Toyota", "Camry", 2022, "Silver", 28_000, true),
        listing("Honda", "Civic", 2023, "Blue", 25_000, true),
        listing("Ford", "Mustang", 2021, "Red", 35_000, false),
        listing("BMW", "X3", 2023, "Black", 45_000, true),
        listing("Audi", "A4", 2022, "White", 42_000, true),
    ]
}

fn listing(
    make: &str,
    model: &str,
    year: i32,
    color: &str,
    price: i64,
    is_available: bool,
) -> CreateCar {
    CreateCar {
        make: make.to_string(),
        model: model.to_string(),
        year,
        color: color.to_string(),
        price: Decimal::from(price),
        is_available,
    }
}
