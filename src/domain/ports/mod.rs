//! Domain ports
//!
//! Storage interfaces required by the services; implemented by the
//! adapters layer.

pub mod repositories;

pub use repositories::{CarRepository, CustomerRepository, RentalRepository, ViolationRepository};
