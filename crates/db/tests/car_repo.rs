//! Integration tests for the in-memory car repository.
//!
//! Exercises id assignment, update semantics, deletion, filtering, the seed
//! catalog, and request DTO validation.

use std::collections::HashSet;
use std::sync::Arc;

use carlot_db::models::car::{CreateCar, UpdateCar};
use carlot_db::repositories::CarRepo;
use rust_decimal::Decimal;
use validator::Validate;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_car(make: &str, model: &str, year: i32, price: i64) -> CreateCar {
    CreateCar {
        make: make.to_string(),
        model: model.to_string(),
        year,
        color: "Green".to_string(),
        price: Decimal::from(price),
        is_available: true,
    }
}

// ---------------------------------------------------------------------------
// Seed catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_store_holds_five_catalog_records() {
    let repo = CarRepo::seeded();

    let cars = repo.find_all().await;
    let ids: Vec<i64> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let mustang = repo.find_by_id(3).await.unwrap();
    assert_eq!(mustang.make, "Ford");
    assert!(!mustang.is_available);
    assert!(mustang.updated_at.is_none());
}

#[tokio::test]
async fn seeded_store_continues_ids_after_catalog() {
    let repo = CarRepo::seeded();

    let car = repo.create(&new_car("Kia", "Rio", 2020, 15_000)).await;

    assert_eq!(car.id, 6);
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_starts_ids_at_one() {
    let repo = CarRepo::new();

    let car = repo.create(&new_car("Kia", "Rio", 2020, 15_000)).await;

    assert_eq!(car.id, 1);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let repo = CarRepo::new();

    let first = repo.create(&new_car("Kia", "Rio", 2020, 15_000)).await;
    let second = repo.create(&new_car("Kia", "Ceed", 2021, 18_000)).await;
    assert!(repo.delete(second.id).await);
    let third = repo.create(&new_car("Kia", "Soul", 2022, 21_000)).await;

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_assign_distinct_ids() {
    let repo = Arc::new(CarRepo::new());

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(&new_car("Kia", &format!("Model {i}"), 2020, 10_000 + i))
                    .await
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 64);
    assert_eq!(ids.iter().copied().min(), Some(1));
    assert_eq!(ids.iter().copied().max(), Some(64));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_preserves_id_and_created_at() {
    let repo = CarRepo::new();
    let created = repo.create(&new_car("Kia", "Rio", 2020, 15_000)).await;

    let mut changed = created.clone();
    changed.id = 999;
    changed.created_at = chrono::Utc::now() + chrono::Duration::days(30);
    changed.make = "Hyundai".to_string();

    let before_update = chrono::Utc::now();
    let updated = repo.update(created.id, changed).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.make, "Hyundai");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.unwrap() >= before_update);

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, updated);
    assert!(repo.find_by_id(999).await.is_none());
}

#[tokio::test]
async fn update_of_unknown_id_returns_none_and_inserts_nothing() {
    let repo = CarRepo::seeded();
    let template = repo.find_by_id(1).await.unwrap();

    let result = repo.update(42, template).await;

    assert!(result.is_none());
    assert_eq!(repo.count().await, 5);
    assert!(repo.find_by_id(42).await.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_record() {
    let repo = CarRepo::seeded();

    assert!(repo.delete(1).await);

    assert!(repo.find_by_id(1).await.is_none());
    assert_eq!(repo.count().await, 4);
}

#[tokio::test]
async fn delete_of_unknown_id_returns_false() {
    let repo = CarRepo::seeded();

    assert!(!repo.delete(42).await);
    assert_eq!(repo.count().await, 5);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_make_is_case_insensitive() {
    let repo = CarRepo::seeded();

    let cars = repo.find_by_make(Some("toYOTA")).await;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].model, "Camry");
}

#[tokio::test]
async fn find_by_make_is_exact_not_prefix() {
    let repo = CarRepo::seeded();

    assert!(repo.find_by_make(Some("Toy")).await.is_empty());
}

#[tokio::test]
async fn find_by_make_with_absent_or_empty_input_returns_nothing() {
    let repo = CarRepo::seeded();

    assert!(repo.find_by_make(None).await.is_empty());
    assert!(repo.find_by_make(Some("")).await.is_empty());
    assert!(repo.find_by_make(Some("   ")).await.is_empty());
}

#[tokio::test]
async fn find_available_excludes_unavailable_records() {
    let repo = CarRepo::seeded();

    let cars = repo.find_available().await;

    assert_eq!(cars.len(), 4);
    assert!(cars.iter().all(|c| c.is_available));
    assert!(cars.iter().all(|c| c.id != 3));
}

// ---------------------------------------------------------------------------
// DTO validation
// ---------------------------------------------------------------------------

#[test]
fn create_car_accepts_valid_input() {
    assert!(new_car("Kia", "Rio", 2020, 15_000).validate().is_ok());
}

#[test]
fn create_car_rejects_out_of_range_values() {
    let mut input = new_car("Kia", "Rio", 1899, 15_000);
    assert!(input.validate().is_err());

    input.year = 2031;
    assert!(input.validate().is_err());

    input.year = 2030;
    input.price = Decimal::ZERO;
    assert!(input.validate().is_err());

    input.price = Decimal::new(1, 2);
    assert!(input.validate().is_ok());
}

#[test]
fn create_car_rejects_blank_or_long_strings() {
    let mut input = new_car("  ", "Rio", 2020, 15_000);
    assert!(input.validate().is_err());

    input.make = "K".repeat(51);
    assert!(input.validate().is_err());

    input.make = "Kia".to_string();
    input.color = "c".repeat(21);
    assert!(input.validate().is_err());

    input.color = String::new();
    assert!(input.validate().is_ok());
}

#[test]
fn create_car_defaults_to_available() {
    let input: CreateCar = serde_json::from_value(serde_json::json!({
        "make": "Kia",
        "model": "Rio",
        "year": 2020,
        "price": 15000
    }))
    .unwrap();

    assert!(input.is_available);
    assert_eq!(input.color, "");
}

#[test]
fn update_car_validates_only_present_fields() {
    assert!(UpdateCar::default().validate().is_ok());

    let update = UpdateCar {
        make: Some(String::new()),
        ..Default::default()
    };
    assert!(update.validate().is_ok());

    let update = UpdateCar {
        year: Some(1800),
        ..Default::default()
    };
    assert!(update.validate().is_err());

    let update = UpdateCar {
        price: Some(Decimal::from(-5)),
        ..Default::default()
    };
    assert!(update.validate().is_err());
}

#[test]
fn update_car_rejects_whitespace_only_text() {
    for update in [
        UpdateCar {
            make: Some("   ".to_string()),
            ..Default::default()
        },
        UpdateCar {
            model: Some("\t".to_string()),
            ..Default::default()
        },
        UpdateCar {
            color: Some(" ".to_string()),
            ..Default::default()
        },
    ] {
        assert!(update.validate().is_err(), "{update:?} should be rejected");
    }

    let update = UpdateCar {
        make: Some(" Kia ".to_string()),
        ..Default::default()
    };
    assert!(update.validate().is_ok());
}
