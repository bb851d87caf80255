//! Domain entities
//!
//! The four rental-business value types. All are immutable: "updating"
//! means constructing a new value and writing it back under the same
//! identity.

pub mod car;
pub mod customer;
pub mod rental;
pub mod violation;

pub use car::{Car, CarId, CarStatus, NewCar};
pub use customer::{Customer, CustomerId, NewCustomer};
pub use rental::{DepositStatus, NewRental, Rental, RentalId, RentalStatus};
pub use violation::{NewViolation, Violation, ViolationId, ViolationStatus};
