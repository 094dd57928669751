//! Repository layer. One repository per stored entity.

pub mod car_repo;

pub use car_repo::CarRepo;
