//! Violation service
//!
//! Records offenses against rentals and settles their fines. Resolving a
//! violation marks it PAID; "resolved" is a settlement outcome, not a
//! distinct terminal state, so revenue queries count PAID fines only.

use std::sync::Arc;

use crate::app::validation::{parse_date, parse_date_time};
use crate::domain::entities::{NewViolation, RentalId, Violation, ViolationId, ViolationStatus};
use crate::domain::ports::{RentalRepository, ViolationRepository};
use crate::error::DomainError;

/// Service for managing violations and their fines
pub struct ViolationService<VR, RR>
where
    VR: ViolationRepository,
    RR: RentalRepository,
{
    violations: Arc<VR>,
    rentals: Arc<RR>,
}

impl<VR, RR> ViolationService<VR, RR>
where
    VR: ViolationRepository,
    RR: RentalRepository,
{
    pub fn new(violations: Arc<VR>, rentals: Arc<RR>) -> Self {
        Self {
            violations,
            rentals,
        }
    }

    /// Record a violation against an existing rental
    ///
    /// The rental must exist but may be in any status; offenses are often
    /// reported after the rental has already been completed.
    pub async fn record_violation(
        &self,
        rental_id: RentalId,
        date_time: &str,
        description: &str,
        fine_amount: i64,
        status: &str,
    ) -> Result<Violation, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Valid rental ID is required"));
        }
        let date_time = parse_date_time(date_time)?;
        if description.trim().is_empty() {
            return Err(DomainError::invalid("Description is required"));
        }
        if fine_amount < 0 {
            return Err(DomainError::invalid("Fine amount cannot be negative"));
        }
        if status.trim().is_empty() {
            return Err(DomainError::invalid("Status is required"));
        }

        if self.rentals.find_by_id(rental_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Rental {} not found",
                rental_id
            )));
        }
        let status: ViolationStatus = status.parse().map_err(DomainError::InvalidArgument)?;

        let violation = self
            .violations
            .create(&NewViolation {
                rental_id,
                date_time,
                description: description.to_string(),
                fine_amount,
                status,
            })
            .await?;

        tracing::info!(violation_id = %violation.id, rental_id = %rental_id, "violation recorded");
        Ok(violation)
    }

    /// Look up a violation by ID
    pub async fn get_violation(&self, id: ViolationId) -> Result<Option<Violation>, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid violation ID"));
        }
        self.violations.find_by_id(id).await
    }

    /// All recorded violations
    pub async fn get_all_violations(&self) -> Result<Vec<Violation>, DomainError> {
        self.violations.find_all().await
    }

    /// Violations recorded against a rental
    pub async fn get_violations_by_rental(
        &self,
        rental_id: RentalId,
    ) -> Result<Vec<Violation>, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        self.violations.find_by_rental(rental_id).await
    }

    /// Violations still awaiting settlement
    pub async fn get_pending_violations(&self) -> Result<Vec<Violation>, DomainError> {
        self.violations.find_by_status(ViolationStatus::Pending).await
    }

    /// Violations whose fines have been paid
    pub async fn get_paid_violations(&self) -> Result<Vec<Violation>, DomainError> {
        self.violations.find_by_status(ViolationStatus::Paid).await
    }

    /// Settle a violation by marking it PAID
    pub async fn resolve_violation(&self, id: ViolationId) -> Result<(), DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid violation ID"));
        }
        if !self
            .violations
            .update_status(id, ViolationStatus::Paid)
            .await?
        {
            return Err(DomainError::NotFound(format!("Violation {} not found", id)));
        }
        tracing::info!(violation_id = %id, "violation resolved");
        Ok(())
    }

    /// Correct the fine amount on an existing violation
    pub async fn update_fine_amount(
        &self,
        id: ViolationId,
        fine_amount: i64,
    ) -> Result<(), DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid violation ID"));
        }
        if fine_amount < 0 {
            return Err(DomainError::invalid("Fine amount cannot be negative"));
        }
        if !self.violations.update_fine_amount(id, fine_amount).await? {
            return Err(DomainError::NotFound(format!("Violation {} not found", id)));
        }
        tracing::info!(violation_id = %id, fine_amount, "fine amount corrected");
        Ok(())
    }

    /// Remove a violation record; `Ok(false)` when it does not exist
    pub async fn delete_violation(&self, id: ViolationId) -> Result<bool, DomainError> {
        if id.0 <= 0 {
            return Err(DomainError::invalid("Invalid violation ID"));
        }
        if self.violations.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.violations.delete(id).await?;
        tracing::info!(violation_id = %id, "violation removed");
        Ok(true)
    }

    /// Sum of all fines recorded against a rental
    pub async fn get_total_fines_for_rental(
        &self,
        rental_id: RentalId,
    ) -> Result<i64, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        self.violations.total_fines_by_rental(rental_id).await
    }

    /// Sum of PENDING fines still owed against a rental
    pub async fn get_total_pending_fines_for_rental(
        &self,
        rental_id: RentalId,
    ) -> Result<i64, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        self.violations
            .total_pending_fines_by_rental(rental_id)
            .await
    }

    /// Whether any violation, settled or not, references the rental
    pub async fn has_violations(&self, rental_id: RentalId) -> Result<bool, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        self.violations.exists_by_rental(rental_id).await
    }

    /// Whether a rental still has unsettled violations
    pub async fn has_pending_violations(&self, rental_id: RentalId) -> Result<bool, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        let pending = self
            .violations
            .find_by_rental_and_status(rental_id, ViolationStatus::Pending)
            .await?;
        Ok(!pending.is_empty())
    }

    /// Violations whose fine is strictly greater than the given amount
    pub async fn get_violations_with_fine_greater_than(
        &self,
        min: i64,
    ) -> Result<Vec<Violation>, DomainError> {
        if min < 0 {
            return Err(DomainError::invalid("Fine amount cannot be negative"));
        }
        self.violations.find_by_fine_greater_than(min).await
    }

    /// Violations whose offense date falls within the inclusive range
    pub async fn get_violations_in_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Violation>, DomainError> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        if end < start {
            return Err(DomainError::invalid("End date must be after start date"));
        }
        self.violations.find_by_date_range(start, end).await
    }

    /// Mark every PENDING violation against a rental PAID
    ///
    /// Returns `Ok(true)` only if every update succeeded; vacuously true
    /// when the rental has no pending violations.
    pub async fn resolve_all_violations_for_rental(
        &self,
        rental_id: RentalId,
    ) -> Result<bool, DomainError> {
        if rental_id.0 <= 0 {
            return Err(DomainError::invalid("Invalid rental ID"));
        }
        let pending = self
            .violations
            .find_by_rental_and_status(rental_id, ViolationStatus::Pending)
            .await?;

        let mut all_resolved = true;
        for violation in &pending {
            let resolved = self
                .violations
                .update_status(violation.id, ViolationStatus::Paid)
                .await?;
            all_resolved = all_resolved && resolved;
        }

        if !pending.is_empty() {
            tracing::info!(rental_id = %rental_id, count = pending.len(), "violations resolved");
        }
        Ok(all_resolved)
    }

    /// Total revenue collected from PAID fines across all rentals
    pub async fn get_total_revenue_from_fines(&self) -> Result<i64, DomainError> {
        self.violations.total_revenue_from_fines().await
    }
}
