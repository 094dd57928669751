//! Domain types, errors, and pure listing rules shared by the store and the
//! API layer. Nothing in this crate touches storage.

pub mod car;
pub mod error;
pub mod types;
