//! Business rule layer sitting between the HTTP handlers and the store.

pub mod car_service;

pub use car_service::CarService;
