//! Rental domain entity
//!
//! A rental agreement tying a customer to a car over a date interval. Created
//! ACTIVE, transitions once to COMPLETED; the deposit status is an
//! independent attribute with no enforced transition order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CarId, CustomerId};

/// Unique identifier for a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalId(pub i64);

impl From<i64> for RentalId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentalStatus {
    Active,
    Completed,
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalStatus::Active => write!(f, "ACTIVE"),
            RentalStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(RentalStatus::Active),
            "COMPLETED" => Ok(RentalStatus::Completed),
            _ => Err(format!("Unknown rental status: {}", s)),
        }
    }
}

/// Payment state of the security deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepositStatus {
    Paid,
    Refunded,
    Pending,
}

impl std::fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositStatus::Paid => write!(f, "PAID"),
            DepositStatus::Refunded => write!(f, "REFUNDED"),
            DepositStatus::Pending => write!(f, "PENDING"),
        }
    }
}

impl std::str::FromStr for DepositStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAID" => Ok(DepositStatus::Paid),
            "REFUNDED" => Ok(DepositStatus::Refunded),
            "PENDING" => Ok(DepositStatus::Pending),
            _ => Err(format!("Unknown deposit status: {}", s)),
        }
    }
}

/// A rental agreement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub customer_id: CustomerId,
    pub car_id: CarId,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub cost: i64,
    pub deposit_status: DepositStatus,
    pub status: RentalStatus,
}

impl Rental {
    /// Rebuild with a different rental status, same identity
    pub fn with_status(&self, status: RentalStatus) -> Rental {
        Rental {
            status,
            ..self.clone()
        }
    }

    /// Rebuild with a different deposit status, same identity
    pub fn with_deposit_status(&self, deposit_status: DepositStatus) -> Rental {
        Rental {
            deposit_status,
            ..self.clone()
        }
    }
}

/// Data needed to open a new rental. The rental service always sets `status`
/// to ACTIVE; it is never taken from the caller.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub customer_id: CustomerId,
    pub car_id: CarId,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub cost: i64,
    pub deposit_status: DepositStatus,
    pub status: RentalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_status_from_str_is_case_insensitive() {
        assert_eq!("paid".parse::<DepositStatus>().unwrap(), DepositStatus::Paid);
        assert_eq!(
            "Refunded".parse::<DepositStatus>().unwrap(),
            DepositStatus::Refunded
        );
        assert_eq!(
            "PENDING".parse::<DepositStatus>().unwrap(),
            DepositStatus::Pending
        );
        assert!("held".parse::<DepositStatus>().is_err());
    }

    #[test]
    fn rental_status_display_is_uppercase() {
        assert_eq!(RentalStatus::Active.to_string(), "ACTIVE");
        assert_eq!(RentalStatus::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn with_status_keeps_other_fields() {
        let rental = Rental {
            id: RentalId(1),
            customer_id: CustomerId(2),
            car_id: CarId(3),
            date_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            date_end: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            cost: 100,
            deposit_status: DepositStatus::Pending,
            status: RentalStatus::Active,
        };

        let done = rental.with_status(RentalStatus::Completed);

        assert_eq!(done.id, rental.id);
        assert_eq!(done.car_id, rental.car_id);
        assert_eq!(done.deposit_status, DepositStatus::Pending);
        assert_eq!(done.status, RentalStatus::Completed);
    }
}
