//! In-memory violation store

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{NewViolation, RentalId, Violation, ViolationId, ViolationStatus};
use crate::domain::ports::ViolationRepository;
use crate::error::DomainError;

/// Concurrency-safe keyed storage for violations with monotonic identity
/// assignment
pub struct InMemoryViolationRepository {
    violations: Arc<RwLock<HashMap<ViolationId, Violation>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryViolationRepository {
    fn default() -> Self {
        Self {
            violations: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryViolationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored violations
    pub fn len(&self) -> usize {
        self.violations.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ViolationRepository for InMemoryViolationRepository {
    async fn create(&self, violation: &NewViolation) -> Result<Violation, DomainError> {
        let mut violations = self.violations.write().unwrap();
        let id = ViolationId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let violation = Violation {
            id,
            rental_id: violation.rental_id,
            date_time: violation.date_time,
            description: violation.description.clone(),
            fine_amount: violation.fine_amount,
            status: violation.status,
        };
        violations.insert(id, violation.clone());
        Ok(violation)
    }

    async fn save(&self, violation: &Violation) -> Result<Violation, DomainError> {
        let mut violations = self.violations.write().unwrap();
        violations.insert(violation.id, violation.clone());
        Ok(violation.clone())
    }

    async fn find_by_id(&self, id: ViolationId) -> Result<Option<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        let mut all: Vec<Violation> = violations.values().cloned().collect();
        all.sort_by_key(|v| v.id.0);
        Ok(all)
    }

    async fn delete(&self, id: ViolationId) -> Result<(), DomainError> {
        let mut violations = self.violations.write().unwrap();
        violations.remove(&id);
        Ok(())
    }

    async fn find_by_rental(&self, rental_id: RentalId) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.rental_id == rental_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(
        &self,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_rental_and_status(
        &self,
        rental_id: RentalId,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.rental_id == rental_id && v.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_fine_greater_than(&self, min: i64) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.fine_amount > min)
            .cloned()
            .collect())
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Violation>, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| {
                let date = v.date_time.date();
                date >= start && date <= end
            })
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: ViolationId,
        status: ViolationStatus,
    ) -> Result<bool, DomainError> {
        let mut violations = self.violations.write().unwrap();
        match violations.get(&id) {
            Some(violation) => {
                let updated = violation.with_status(status);
                violations.insert(id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_fine_amount(
        &self,
        id: ViolationId,
        fine_amount: i64,
    ) -> Result<bool, DomainError> {
        let mut violations = self.violations.write().unwrap();
        match violations.get(&id) {
            Some(violation) => {
                let updated = violation.with_fine_amount(fine_amount);
                violations.insert(id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists_by_rental(&self, rental_id: RentalId) -> Result<bool, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations.values().any(|v| v.rental_id == rental_id))
    }

    async fn total_fines_by_rental(&self, rental_id: RentalId) -> Result<i64, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.rental_id == rental_id)
            .map(|v| v.fine_amount)
            .sum())
    }

    async fn total_pending_fines_by_rental(
        &self,
        rental_id: RentalId,
    ) -> Result<i64, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.rental_id == rental_id && v.status == ViolationStatus::Pending)
            .map(|v| v.fine_amount)
            .sum())
    }

    async fn total_revenue_from_fines(&self) -> Result<i64, DomainError> {
        let violations = self.violations.read().unwrap();
        Ok(violations
            .values()
            .filter(|v| v.status == ViolationStatus::Paid)
            .map(|v| v.fine_amount)
            .sum())
    }
}
