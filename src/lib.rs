//! Car rental core
//!
//! Domain model and services for a car rental business: fleet management,
//! customer registration, the rental lifecycle, and violation tracking.
//! Uses hexagonal (ports & adapters) architecture; the only shipped adapter
//! is an in-memory store.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{CustomerService, FleetService, RentalService, ViolationService};
pub use domain::entities::{
    Car, CarId, CarStatus, Customer, CustomerId, DepositStatus, NewCar, NewCustomer, NewRental,
    NewViolation, Rental, RentalId, RentalStatus, Violation, ViolationId, ViolationStatus,
};
pub use error::DomainError;
