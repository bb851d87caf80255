//! Customer service
//!
//! Registration, lookup, and updates for customers. Passport and driver
//! license numbers are globally unique and immutable once set.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// Register a new customer
    ///
    /// Fails with `DuplicateKey` if another customer already holds the same
    /// driver license or passport number.
    pub async fn add_customer(
        &self,
        full_name: &str,
        passport: i64,
        driver_license: i64,
        phone: i64,
        address: &str,
    ) -> Result<Customer, DomainError> {
        if full_name.trim().is_empty() {
            return Err(DomainError::invalid("Full name is required"));
        }
        if passport <= 0 {
            return Err(DomainError::invalid("Valid passport number is required"));
        }
        if driver_license <= 0 {
            return Err(DomainError::invalid(
                "Valid driver license number is required",
            ));
        }
        if phone <= 0 {
            return Err(DomainError::invalid("Valid phone number is required"));
        }
        if address.trim().is_empty() {
            return Err(DomainError::invalid("Address is required"));
        }

        if self
            .customers
            .find_by_driver_license(driver_license)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateKey(format!(
                "Customer with driver license {} already exists",
                driver_license
            )));
        }
        if self.customers.find_by_passport(passport).await?.is_some() {
            return Err(DomainError::DuplicateKey(format!(
                "Customer with passport {} already exists",
                passport
            )));
        }

        let customer = self
            .customers
            .create(&NewCustomer {
                full_name: full_name.to_string(),
                passport,
                driver_license,
                phone,
                address: address.to_string(),
            })
            .await?;

        tracing::info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }

    /// Look up a customer by ID
    pub async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        self.customers.find_by_id(id).await
    }

    /// All registered customers
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.customers.find_all().await
    }

    /// Look up a customer by driver license number
    pub async fn get_customer_by_driver_license(
        &self,
        driver_license: i64,
    ) -> Result<Option<Customer>, DomainError> {
        if driver_license <= 0 {
            return Err(DomainError::invalid(
                "Valid driver license number is required",
            ));
        }
        self.customers.find_by_driver_license(driver_license).await
    }

    /// Look up a customer by passport number
    pub async fn get_customer_by_passport(
        &self,
        passport: i64,
    ) -> Result<Option<Customer>, DomainError> {
        if passport <= 0 {
            return Err(DomainError::invalid("Valid passport number is required"));
        }
        self.customers.find_by_passport(passport).await
    }

    /// Customers whose full name contains the fragment (case-insensitive)
    pub async fn find_customers_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<Customer>, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Name is required for search"));
        }
        self.customers.find_by_name_containing(name).await
    }

    /// Update a customer's mutable fields (name, phone, address)
    ///
    /// Passport and driver license are preserved from the stored record.
    /// Fails with `NotFound` when the customer does not exist.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        full_name: &str,
        phone: i64,
        address: &str,
    ) -> Result<Customer, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        if full_name.trim().is_empty() {
            return Err(DomainError::invalid("Full name is required"));
        }
        if phone <= 0 {
            return Err(DomainError::invalid("Valid phone number is required"));
        }
        if address.trim().is_empty() {
            return Err(DomainError::invalid("Address is required"));
        }

        let existing = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Customer {} not found", id)))?;

        let updated = existing.with_contact(full_name, phone, address);
        self.customers.save(&updated).await?;
        tracing::info!(customer_id = %id, "customer updated");
        Ok(updated)
    }

    /// Remove a customer; `Ok(false)` when the customer does not exist
    pub async fn delete_customer(&self, id: CustomerId) -> Result<bool, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        if self.customers.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.customers.delete(id).await?;
        tracing::info!(customer_id = %id, "customer removed");
        Ok(true)
    }

    /// Eligibility predicate used before offering a rental: the customer must
    /// exist. The active-rental cap is enforced by the rental service, which
    /// owns the rental state.
    pub async fn can_customer_rent(&self, id: CustomerId) -> Result<bool, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid customer ID"));
        }
        Ok(self.customers.find_by_id(id).await?.is_some())
    }

    /// Whether any customer holds the given driver license
    pub async fn customer_exists_by_driver_license(
        &self,
        driver_license: i64,
    ) -> Result<bool, DomainError> {
        if driver_license <= 0 {
            return Err(DomainError::invalid(
                "Valid driver license number is required",
            ));
        }
        self.customers.exists_by_driver_license(driver_license).await
    }
}
