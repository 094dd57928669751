//! Handlers for the car inventory.
//!
//! Thin adapters: extract the request, call [`CarService`], and map
//! absent results to 404. Business rule violations arrive as [`CoreError`]
//! and are turned into responses by [`AppError`].
//!
//! [`CarService`]: crate::services::CarService

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use carlot_core::car::ENTITY_CAR;
use carlot_core::error::CoreError;
use carlot_core::types::DbId;
use carlot_db::models::car::{CreateCar, UpdateCar};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::routes::API_PREFIX;
use crate::state::AppState;

/// Payload of `GET /cars/average-price`.
#[derive(Debug, Serialize)]
pub struct AveragePrice {
    pub average_price: Decimal,
}

fn car_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_CAR,
        id,
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/cars
pub async fn list_cars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cars = state.cars.list_cars().await;

    Ok(Json(DataResponse { data: cars }))
}

/// GET /api/v1/cars/{id}
pub async fn get_car(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let car = state.cars.get_car(id).await.ok_or_else(|| car_not_found(id))?;

    Ok(Json(DataResponse { data: car }))
}

/// POST /api/v1/cars
///
/// Returns 201 with a `Location` header pointing at the new car, or 409 when
/// an equivalent listing already exists.
pub async fn create_car(
    State(state): State<AppState>,
    input: Result<Json<CreateCar>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input?;
    let car = state.cars.create_car(input).await?;
    let location = format!("{API_PREFIX}/cars/{}", car.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: car }),
    ))
}

/// PUT /api/v1/cars/{id}
///
/// Partial update: omitted or empty fields keep their current value.
pub async fn update_car(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateCar>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let Json(input) = input?;
    let car = state
        .cars
        .update_car(id, input)
        .await?
        .ok_or_else(|| car_not_found(id))?;

    Ok(Json(DataResponse { data: car }))
}

/// DELETE /api/v1/cars/{id}
///
/// Returns 204, 404 for an unknown id, or 400 when the car is not available.
pub async fn delete_car(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    if !state.cars.delete_car(id).await? {
        return Err(car_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Filters and aggregates
// ---------------------------------------------------------------------------

/// GET /api/v1/cars/make/{make}
pub async fn list_by_make(
    State(state): State<AppState>,
    Path(make): Path<String>,
) -> AppResult<impl IntoResponse> {
    let cars = state.cars.list_by_make(Some(make.as_str())).await;

    Ok(Json(DataResponse { data: cars }))
}

/// GET /api/v1/cars/available
pub async fn list_available(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cars = state.cars.list_available().await;

    Ok(Json(DataResponse { data: cars }))
}

/// PATCH /api/v1/cars/{id}/unavailable
pub async fn mark_unavailable(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let car = state
        .cars
        .mark_unavailable(id)
        .await
        .ok_or_else(|| car_not_found(id))?;

    Ok(Json(DataResponse { data: car }))
}

/// GET /api/v1/cars/average-price
pub async fn average_price(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let average_price = state.cars.average_price().await?;

    Ok(Json(DataResponse {
        data: AveragePrice { average_price },
    }))
}
