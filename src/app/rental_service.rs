//! Rental service
//!
//! The central workflow: validates and creates rentals, enforces car and
//! customer eligibility, and transitions rental and car status together.
//!
//! A rental is created ACTIVE and transitions exactly once to COMPLETED.
//! Creating a rental flips the car to RENTED; completing it flips the car
//! back to AVAILABLE. The two writes touch two different stores and are not
//! transactional with each other; sequential callers never observe the gap.

use std::sync::Arc;

use crate::app::validation::parse_date;
use crate::domain::entities::{
    Car, CarId, CarStatus, CustomerId, DepositStatus, NewRental, Rental, RentalId, RentalStatus,
};
use crate::domain::ports::{CarRepository, CustomerRepository, RentalRepository};
use crate::error::DomainError;

/// How many ACTIVE rentals a single customer may hold at once
pub const MAX_ACTIVE_RENTALS_PER_CUSTOMER: usize = 2;

/// Service for the rental workflow
pub struct RentalService<RR, CR, UR>
where
    RR: RentalRepository,
    CR: CarRepository,
    UR: CustomerRepository,
{
    rentals: Arc<RR>,
    cars: Arc<CR>,
    customers: Arc<UR>,
}

impl<RR, CR, UR> RentalService<RR, CR, UR>
where
    RR: RentalRepository,
    CR: CarRepository,
    UR: CustomerRepository,
{
    pub fn new(rentals: Arc<RR>, cars: Arc<CR>, customers: Arc<UR>) -> Self {
        Self {
            rentals,
            cars,
            customers,
        }
    }

    /// Open a new rental
    ///
    /// Validates eagerly and fails on the first violated precondition:
    /// structural input checks, then date ordering, then existence of
    /// customer and car, then car eligibility, then the customer's
    /// active-rental cap. On success the rental is persisted ACTIVE and the
    /// car is flipped to RENTED.
    pub async fn create_rental(
        &self,
        customer_id: CustomerId,
        car_id: CarId,
        date_start: &str,
        date_end: &str,
        cost: i64,
        deposit_status: &str,
    ) -> Result<Rental, DomainError> {
        if customer_id.0 <= 0 {
            return Err(DomainError::invalid("Valid customer ID is required"));
        }
        if car_id.0 <= 0 {
            return Err(DomainError::invalid("Valid car ID is required"));
        }
        let start = parse_date(date_start)?;
        let end = parse_date(date_end)?;
        if cost <= 0 {
            return Err(DomainError::invalid("Cost must be positive"));
        }
        if deposit_status.trim().is_empty() {
            return Err(DomainError::invalid("Deposit status is required"));
        }
        let deposit_status: DepositStatus = deposit_status
            .parse()
            .map_err(DomainError::InvalidArgument)?;

        if end <= start {
            return Err(DomainError::invalid("End date must be after start date"));
        }

        if self.customers.find_by_id(customer_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Customer {} not found",
                customer_id
            )));
        }
        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Car {} not found", car_id)))?;

        if car.status != CarStatus::Available {
            return Err(DomainError::IllegalState(format!(
                "Car is not available for rental. Current status: {}",
                car.status
            )));
        }
        // Defense against a status/record inconsistency: the car's own status
        // may disagree with the rental records.
        if self.rentals.is_car_currently_rented(car_id).await? {
            return Err(DomainError::IllegalState(
                "Car is currently rented".to_string(),
            ));
        }

        if !self.can_customer_rent(customer_id).await? {
            return Err(DomainError::IllegalState(
                "Customer is not eligible to rent a car".to_string(),
            ));
        }

        let rental = self
            .rentals
            .create(&NewRental {
                customer_id,
                car_id,
                date_start: start,
                date_end: end,
                cost,
                deposit_status,
                status: RentalStatus::Active,
            })
            .await?;

        // Second, independent write; a crash between the two leaves an
        // ACTIVE rental against an AVAILABLE car.
        self.cars.update_status(car_id, CarStatus::Rented).await?;

        tracing::info!(rental_id = %rental.id, customer_id = %customer_id, car_id = %car_id, "rental opened");
        Ok(rental)
    }

    /// Look up a rental by ID
    pub async fn get_rental(&self, id: RentalId) -> Result<Option<Rental>, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        self.rentals.find_by_id(id).await
    }

    /// All rentals
    pub async fn get_all_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        self.rentals.find_all().await
    }

    /// Rentals held by a customer
    pub async fn get_customer_rentals(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Rental>, DomainError> {
        if customer_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        self.rentals.find_by_customer(customer_id).await
    }

    /// Rentals referencing a car
    pub async fn get_car_rentals(&self, car_id: CarId) -> Result<Vec<Rental>, DomainError> {
        if car_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid car ID"));
        }
        self.rentals.find_by_car(car_id).await
    }

    /// Complete an ACTIVE rental and release its car
    ///
    /// Returns `Ok(false)` when the rental does not exist or is already
    /// COMPLETED (there is no transition out of COMPLETED). Returns
    /// `Ok(true)` only when both the rental and the car status updates
    /// succeeded.
    pub async fn complete_rental(&self, rental_id: RentalId) -> Result<bool, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }

        let rental = match self.rentals.find_by_id(rental_id).await? {
            Some(rental) => rental,
            None => return Ok(false),
        };
        if rental.status != RentalStatus::Active {
            return Ok(false);
        }

        if !self
            .rentals
            .update_status(rental_id, RentalStatus::Completed)
            .await?
        {
            return Ok(false);
        }
        let car_released = self
            .cars
            .update_status(rental.car_id, CarStatus::Available)
            .await?;

        tracing::info!(rental_id = %rental_id, car_id = %rental.car_id, "rental completed");
        Ok(car_released)
    }

    /// Rentals currently ACTIVE
    pub async fn get_active_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        self.rentals.find_by_status(RentalStatus::Active).await
    }

    /// Rentals already COMPLETED
    pub async fn get_completed_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        self.rentals.find_by_status(RentalStatus::Completed).await
    }

    /// Set the deposit status of a rental
    ///
    /// The status string must name one of PAID, REFUNDED, PENDING
    /// (case-insensitive). Returns `Ok(false)` when the rental is absent.
    pub async fn update_deposit_status(
        &self,
        rental_id: RentalId,
        deposit_status: &str,
    ) -> Result<bool, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        if deposit_status.trim().is_empty() {
            return Err(DomainError::invalid("Deposit status is required"));
        }
        let deposit_status: DepositStatus = deposit_status
            .parse()
            .map_err(DomainError::InvalidArgument)?;

        self.rentals
            .update_deposit_status(rental_id, deposit_status)
            .await
    }

    /// Rentals whose start date falls within the inclusive range
    pub async fn get_rentals_in_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Rental>, DomainError> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        if end < start {
            return Err(DomainError::invalid("End date must be after start date"));
        }
        self.rentals.find_by_date_range(start, end).await
    }

    /// Whether the customer currently holds any ACTIVE rental
    pub async fn customer_has_active_rentals(
        &self,
        customer_id: CustomerId,
    ) -> Result<bool, DomainError> {
        if customer_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        self.rentals.has_active_rentals(customer_id).await
    }

    /// Read-only availability check used before offering a car for rental:
    /// the car exists, its status is AVAILABLE, and no ACTIVE rental
    /// references it.
    pub async fn is_car_available_for_rental(&self, car_id: CarId) -> Result<bool, DomainError> {
        if car_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid car ID"));
        }
        let car: Option<Car> = self.cars.find_by_id(car_id).await?;
        let Some(car) = car else {
            return Ok(false);
        };
        Ok(car.status == CarStatus::Available
            && !self.rentals.is_car_currently_rented(car_id).await?)
    }

    async fn can_customer_rent(&self, customer_id: CustomerId) -> Result<bool, DomainError> {
        if self.customers.find_by_id(customer_id).await?.is_none() {
            return Ok(false);
        }
        let active = self
            .rentals
            .find_by_customer_and_status(customer_id, RentalStatus::Active)
            .await?;
        Ok(active.len() < MAX_ACTIVE_RENTALS_PER_CUSTOMER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryCarRepository, InMemoryCustomerRepository, InMemoryRentalRepository,
    };
    use crate::test_utils::{new_car, new_customer};

    struct Harness {
        service: RentalService<
            InMemoryRentalRepository,
            InMemoryCarRepository,
            InMemoryCustomerRepository,
        >,
        cars: Arc<InMemoryCarRepository>,
        customers: Arc<InMemoryCustomerRepository>,
        rentals: Arc<InMemoryRentalRepository>,
    }

    fn create_service() -> Harness {
        let rentals = Arc::new(InMemoryRentalRepository::new());
        let cars = Arc::new(InMemoryCarRepository::new());
        let customers = Arc::new(InMemoryCustomerRepository::new());
        Harness {
            service: RentalService::new(rentals.clone(), cars.clone(), customers.clone()),
            cars,
            customers,
            rentals,
        }
    }

    async fn seed_car(h: &Harness) -> CarId {
        h.cars.create(&new_car("VIN-1")).await.unwrap().id
    }

    async fn seed_customer(h: &Harness) -> CustomerId {
        h.customers
            .create(&new_customer(4451, 9987))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_rental_flips_car_to_rented() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;

        let rental = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        assert_eq!(rental.status, RentalStatus::Active);
        assert_eq!(rental.deposit_status, DepositStatus::Pending);
        let car = h.cars.find_by_id(car_id).await.unwrap().unwrap();
        assert_eq!(car.status, CarStatus::Rented);
    }

    #[tokio::test]
    async fn end_date_must_be_strictly_after_start() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;

        let reversed = h
            .service
            .create_rental(customer_id, car_id, "2025-01-10", "2025-01-05", 100, "PENDING")
            .await;
        assert!(matches!(reversed, Err(DomainError::InvalidArgument(_))));

        let same_day = h
            .service
            .create_rental(customer_id, car_id, "2025-01-10", "2025-01-10", 100, "PENDING")
            .await;
        assert!(matches!(same_day, Err(DomainError::InvalidArgument(_))));

        assert!(h.rentals.is_empty());
    }

    #[tokio::test]
    async fn malformed_dates_are_rejected_before_any_lookup() {
        let h = create_service();

        let result = h
            .service
            .create_rental(CustomerId(1), CarId(1), "2025/01/01", "2025-01-03", 100, "PENDING")
            .await;

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn missing_customer_or_car_is_not_found() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;

        let no_customer = h
            .service
            .create_rental(CustomerId(42), car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await;
        assert!(matches!(no_customer, Err(DomainError::NotFound(_))));

        let no_car = h
            .service
            .create_rental(customer_id, CarId(42), "2025-01-01", "2025-01-03", 100, "PENDING")
            .await;
        assert!(matches!(no_car, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn car_in_maintenance_is_rejected() {
        let h = create_service();
        let customer_id = seed_customer(&h).await;
        let mut car = new_car("VIN-1");
        car.status = CarStatus::Maintenance;
        let car_id = h.cars.create(&car).await.unwrap().id;

        let result = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await;

        assert!(matches!(result, Err(DomainError::IllegalState(_))));
    }

    #[tokio::test]
    async fn stale_available_status_with_active_record_is_rejected() {
        // The car says AVAILABLE but a rental record still marks it ACTIVE.
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;
        let other = h.customers.create(&new_customer(5562, 8876)).await.unwrap();
        h.service
            .create_rental(other.id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();
        h.cars
            .update_status(car_id, CarStatus::Available)
            .await
            .unwrap();

        let result = h
            .service
            .create_rental(customer_id, car_id, "2025-01-05", "2025-01-07", 100, "PENDING")
            .await;

        assert!(matches!(result, Err(DomainError::IllegalState(_))));
    }

    #[tokio::test]
    async fn customer_at_two_active_rentals_is_capped() {
        let h = create_service();
        let customer_id = seed_customer(&h).await;
        let car_a = h.cars.create(&new_car("VIN-A")).await.unwrap().id;
        let car_b = h.cars.create(&new_car("VIN-B")).await.unwrap().id;
        let car_c = h.cars.create(&new_car("VIN-C")).await.unwrap().id;

        h.service
            .create_rental(customer_id, car_a, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();
        h.service
            .create_rental(customer_id, car_b, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        let third = h
            .service
            .create_rental(customer_id, car_c, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await;

        assert!(matches!(third, Err(DomainError::IllegalState(_))));
        assert_eq!(h.rentals.len(), 2);
    }

    #[tokio::test]
    async fn completing_a_rental_releases_the_car() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;
        let rental = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        assert!(h.service.complete_rental(rental.id).await.unwrap());

        let stored = h.rentals.find_by_id(rental.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RentalStatus::Completed);
        let car = h.cars.find_by_id(car_id).await.unwrap().unwrap();
        assert_eq!(car.status, CarStatus::Available);
    }

    #[tokio::test]
    async fn completing_twice_or_missing_returns_false() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;
        let rental = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        assert!(h.service.complete_rental(rental.id).await.unwrap());
        assert!(!h.service.complete_rental(rental.id).await.unwrap());
        assert!(!h.service.complete_rental(RentalId(42)).await.unwrap());
    }

    #[tokio::test]
    async fn deposit_status_accepts_known_values_case_insensitively() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;
        let rental = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        assert!(h
            .service
            .update_deposit_status(rental.id, "refunded")
            .await
            .unwrap());
        let stored = h.rentals.find_by_id(rental.id).await.unwrap().unwrap();
        assert_eq!(stored.deposit_status, DepositStatus::Refunded);

        let unknown = h.service.update_deposit_status(rental.id, "HELD").await;
        assert!(matches!(unknown, Err(DomainError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn active_rental_tracking_follows_completion() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;

        assert!(!h
            .service
            .customer_has_active_rentals(customer_id)
            .await
            .unwrap());

        let rental = h
            .service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();
        assert!(h
            .service
            .customer_has_active_rentals(customer_id)
            .await
            .unwrap());

        h.service.complete_rental(rental.id).await.unwrap();
        assert!(!h
            .service
            .customer_has_active_rentals(customer_id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn availability_check_is_read_only() {
        let h = create_service();
        let car_id = seed_car(&h).await;
        let customer_id = seed_customer(&h).await;

        assert!(h.service.is_car_available_for_rental(car_id).await.unwrap());
        assert!(!h.service.is_car_available_for_rental(CarId(42)).await.unwrap());

        h.service
            .create_rental(customer_id, car_id, "2025-01-01", "2025-01-03", 100, "PENDING")
            .await
            .unwrap();

        assert!(!h.service.is_car_available_for_rental(car_id).await.unwrap());
    }
}
