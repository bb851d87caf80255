//! In-memory customer store

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

/// Concurrency-safe keyed storage for customers with monotonic identity
/// assignment
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers
    pub fn len(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.read().unwrap().is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().unwrap();
        let id = CustomerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let customer = Customer {
            id,
            full_name: customer.full_name.clone(),
            passport: customer.passport,
            driver_license: customer.driver_license,
            phone: customer.phone,
            address: customer.address.clone(),
        };
        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().unwrap();
        customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        let mut all: Vec<Customer> = customers.values().cloned().collect();
        all.sort_by_key(|c| c.id.0);
        Ok(all)
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        let mut customers = self.customers.write().unwrap();
        customers.remove(&id);
        Ok(())
    }

    async fn find_by_passport(&self, passport: i64) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .find(|c| c.passport == passport)
            .cloned())
    }

    async fn find_by_driver_license(
        &self,
        driver_license: i64,
    ) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .find(|c| c.driver_license == driver_license)
            .cloned())
    }

    async fn exists_by_driver_license(&self, driver_license: i64) -> Result<bool, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .any(|c| c.driver_license == driver_license))
    }

    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Customer>, DomainError> {
        let fragment = fragment.to_lowercase();
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .filter(|c| c.full_name.to_lowercase().contains(&fragment))
            .cloned()
            .collect())
    }
}
