//! Application layer
//!
//! Use-case services over the repository ports. Each service owns one slice
//! of the domain; cross-entity workflows (rental creation, completion) live
//! in the rental service, which holds the repositories it coordinates.

pub mod customer_service;
pub mod fleet_service;
pub mod rental_service;
pub mod validation;
pub mod violation_service;

pub use customer_service::CustomerService;
pub use fleet_service::FleetService;
pub use rental_service::{RentalService, MAX_ACTIVE_RENTALS_PER_CUSTOMER};
pub use violation_service::ViolationService;
