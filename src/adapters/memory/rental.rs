//! In-memory rental store

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{
    CarId, CustomerId, DepositStatus, NewRental, Rental, RentalId, RentalStatus,
};
use crate::domain::ports::RentalRepository;
use crate::error::DomainError;

/// Concurrency-safe keyed storage for rentals with monotonic identity
/// assignment
pub struct InMemoryRentalRepository {
    rentals: Arc<RwLock<HashMap<RentalId, Rental>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryRentalRepository {
    fn default() -> Self {
        Self {
            rentals: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rentals
    pub fn len(&self) -> usize {
        self.rentals.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.read().unwrap().is_empty()
    }
}

#[async_trait]
impl RentalRepository for InMemoryRentalRepository {
    async fn create(&self, rental: &NewRental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().unwrap();
        let id = RentalId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let rental = Rental {
            id,
            customer_id: rental.customer_id,
            car_id: rental.car_id,
            date_start: rental.date_start,
            date_end: rental.date_end,
            cost: rental.cost,
            deposit_status: rental.deposit_status,
            status: rental.status,
        };
        rentals.insert(id, rental.clone());
        Ok(rental)
    }

    async fn save(&self, rental: &Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().unwrap();
        rentals.insert(rental.id, rental.clone());
        Ok(rental.clone())
    }

    async fn find_by_id(&self, id: RentalId) -> Result<Option<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        let mut all: Vec<Rental> = rentals.values().cloned().collect();
        all.sort_by_key(|r| r.id.0);
        Ok(all)
    }

    async fn delete(&self, id: RentalId) -> Result<(), DomainError> {
        let mut rentals = self.rentals.write().unwrap();
        rentals.remove(&id);
        Ok(())
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_car(&self, car_id: CarId) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.car_id == car_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: RentalStatus) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_customer_and_status(
        &self,
        customer_id: CustomerId,
        status: RentalStatus,
    ) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.customer_id == customer_id && r.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.date_start >= start && r.date_start <= end)
            .cloned()
            .collect())
    }

    async fn is_car_currently_rented(&self, car_id: CarId) -> Result<bool, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .any(|r| r.car_id == car_id && r.status == RentalStatus::Active))
    }

    async fn has_active_rentals(&self, customer_id: CustomerId) -> Result<bool, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .any(|r| r.customer_id == customer_id && r.status == RentalStatus::Active))
    }

    async fn update_status(
        &self,
        id: RentalId,
        status: RentalStatus,
    ) -> Result<bool, DomainError> {
        let mut rentals = self.rentals.write().unwrap();
        match rentals.get(&id) {
            Some(rental) => {
                let updated = rental.with_status(status);
                rentals.insert(id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_deposit_status(
        &self,
        id: RentalId,
        deposit_status: DepositStatus,
    ) -> Result<bool, DomainError> {
        let mut rentals = self.rentals.write().unwrap();
        match rentals.get(&id) {
            Some(rental) => {
                let updated = rental.with_deposit_status(deposit_status);
                rentals.insert(id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
