//! Repository port traits
//!
//! These traits define the exact query/mutation surface the services require.
//! The in-memory adapters in `adapters::memory` provide the implementations.
//!
//! Conventions shared by all four ports:
//! - `create` allocates the next identity and returns the stored entity
//! - `save` overwrites unconditionally under the entity's present identity
//! - `delete` is a no-op when the identity is absent
//! - targeted field updates return `Ok(false)` when the identity is absent

use async_trait::async_trait;

use chrono::NaiveDate;

use crate::domain::entities::{
    Car, CarId, CarStatus, Customer, CustomerId, DepositStatus, NewCar, NewCustomer, NewRental,
    NewViolation, Rental, RentalId, RentalStatus, Violation, ViolationId, ViolationStatus,
};
use crate::error::DomainError;

/// Repository for Car entities
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Create a new car, assigning the next identity
    async fn create(&self, car: &NewCar) -> Result<Car, DomainError>;

    /// Overwrite a stored car under its present identity
    async fn save(&self, car: &Car) -> Result<Car, DomainError>;

    /// Find a car by ID
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, DomainError>;

    /// All cars, insertion order
    async fn find_all(&self) -> Result<Vec<Car>, DomainError>;

    /// Remove a car; no-op when absent
    async fn delete(&self, id: CarId) -> Result<(), DomainError>;

    /// Find a car by VIN (case-insensitive)
    async fn find_by_vin(&self, vin: &str) -> Result<Option<Car>, DomainError>;

    /// Cars currently in the given status
    async fn find_by_status(&self, status: CarStatus) -> Result<Vec<Car>, DomainError>;

    /// Set a car's status; `Ok(false)` when the car does not exist
    async fn update_status(&self, id: CarId, status: CarStatus) -> Result<bool, DomainError>;
}

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Register a new customer, assigning the next identity
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Overwrite a stored customer under its present identity
    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// All customers, insertion order
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Remove a customer; no-op when absent
    async fn delete(&self, id: CustomerId) -> Result<(), DomainError>;

    /// Find a customer by passport number
    async fn find_by_passport(&self, passport: i64) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by driver license number
    async fn find_by_driver_license(
        &self,
        driver_license: i64,
    ) -> Result<Option<Customer>, DomainError>;

    /// Whether any customer holds the given driver license
    async fn exists_by_driver_license(&self, driver_license: i64) -> Result<bool, DomainError>;

    /// Customers whose full name contains the given fragment (case-insensitive)
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Customer>, DomainError>;
}

/// Repository for Rental entities
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Open a new rental, assigning the next identity
    async fn create(&self, rental: &NewRental) -> Result<Rental, DomainError>;

    /// Overwrite a stored rental under its present identity
    async fn save(&self, rental: &Rental) -> Result<Rental, DomainError>;

    /// Find a rental by ID
    async fn find_by_id(&self, id: RentalId) -> Result<Option<Rental>, DomainError>;

    /// All rentals, insertion order
    async fn find_all(&self) -> Result<Vec<Rental>, DomainError>;

    /// Remove a rental; no-op when absent
    async fn delete(&self, id: RentalId) -> Result<(), DomainError>;

    /// Rentals held by a customer
    async fn find_by_customer(&self, customer_id: CustomerId)
        -> Result<Vec<Rental>, DomainError>;

    /// Rentals referencing a car
    async fn find_by_car(&self, car_id: CarId) -> Result<Vec<Rental>, DomainError>;

    /// Rentals in the given lifecycle status
    async fn find_by_status(&self, status: RentalStatus) -> Result<Vec<Rental>, DomainError>;

    /// Rentals held by a customer in the given status
    async fn find_by_customer_and_status(
        &self,
        customer_id: CustomerId,
        status: RentalStatus,
    ) -> Result<Vec<Rental>, DomainError>;

    /// Rentals whose start date falls within the inclusive range
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Rental>, DomainError>;

    /// Whether any ACTIVE rental references the car
    async fn is_car_currently_rented(&self, car_id: CarId) -> Result<bool, DomainError>;

    /// Whether the customer holds any ACTIVE rental
    async fn has_active_rentals(&self, customer_id: CustomerId) -> Result<bool, DomainError>;

    /// Set a rental's lifecycle status; `Ok(false)` when absent
    async fn update_status(&self, id: RentalId, status: RentalStatus)
        -> Result<bool, DomainError>;

    /// Set a rental's deposit status; `Ok(false)` when absent
    async fn update_deposit_status(
        &self,
        id: RentalId,
        deposit_status: DepositStatus,
    ) -> Result<bool, DomainError>;
}

/// Repository for Violation entities
#[async_trait]
pub trait ViolationRepository: Send + Sync {
    /// Record a new violation, assigning the next identity
    async fn create(&self, violation: &NewViolation) -> Result<Violation, DomainError>;

    /// Overwrite a stored violation under its present identity
    async fn save(&self, violation: &Violation) -> Result<Violation, DomainError>;

    /// Find a violation by ID
    async fn find_by_id(&self, id: ViolationId) -> Result<Option<Violation>, DomainError>;

    /// All violations, insertion order
    async fn find_all(&self) -> Result<Vec<Violation>, DomainError>;

    /// Remove a violation; no-op when absent
    async fn delete(&self, id: ViolationId) -> Result<(), DomainError>;

    /// Violations recorded against a rental
    async fn find_by_rental(&self, rental_id: RentalId) -> Result<Vec<Violation>, DomainError>;

    /// Violations in the given status
    async fn find_by_status(&self, status: ViolationStatus)
        -> Result<Vec<Violation>, DomainError>;

    /// Violations against a rental in the given status
    async fn find_by_rental_and_status(
        &self,
        rental_id: RentalId,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, DomainError>;

    /// Violations whose fine exceeds the given amount
    async fn find_by_fine_greater_than(&self, min: i64) -> Result<Vec<Violation>, DomainError>;

    /// Violations whose offense date falls within the inclusive range
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Violation>, DomainError>;

    /// Set a violation's status; `Ok(false)` when absent
    async fn update_status(
        &self,
        id: ViolationId,
        status: ViolationStatus,
    ) -> Result<bool, DomainError>;

    /// Correct a violation's fine amount; `Ok(false)` when absent
    async fn update_fine_amount(&self, id: ViolationId, fine_amount: i64)
        -> Result<bool, DomainError>;

    /// Whether any violation references the rental
    async fn exists_by_rental(&self, rental_id: RentalId) -> Result<bool, DomainError>;

    /// Sum of fine amounts over all violations against the rental; 0 if none
    async fn total_fines_by_rental(&self, rental_id: RentalId) -> Result<i64, DomainError>;

    /// Sum of fine amounts over PENDING violations against the rental; 0 if none
    async fn total_pending_fines_by_rental(&self, rental_id: RentalId)
        -> Result<i64, DomainError>;

    /// Sum of fine amounts over all PAID violations
    async fn total_revenue_from_fines(&self) -> Result<i64, DomainError>;
}
