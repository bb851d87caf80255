//! Violation domain entity
//!
//! A traffic or parking offense recorded against a rental. Note that
//! resolving a violation sets its status to PAID, not RESOLVED; the RESOLVED
//! state exists only as a caller-supplied initial status.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::RentalId;

/// Unique identifier for a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationId(pub i64);

impl From<i64> for ViolationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ViolationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settlement state of a violation fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViolationStatus {
    Pending,
    Paid,
    Resolved,
}

impl std::fmt::Display for ViolationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationStatus::Pending => write!(f, "PENDING"),
            ViolationStatus::Paid => write!(f, "PAID"),
            ViolationStatus::Resolved => write!(f, "RESOLVED"),
        }
    }
}

impl std::str::FromStr for ViolationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(ViolationStatus::Pending),
            "PAID" => Ok(ViolationStatus::Paid),
            "RESOLVED" => Ok(ViolationStatus::Resolved),
            _ => Err(format!("Unknown violation status: {}", s)),
        }
    }
}

/// A recorded offense tied to a rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub id: ViolationId,
    pub rental_id: RentalId,
    pub date_time: NaiveDateTime,
    pub description: String,
    pub fine_amount: i64,
    pub status: ViolationStatus,
}

impl Violation {
    /// Rebuild with a different status, same identity
    pub fn with_status(&self, status: ViolationStatus) -> Violation {
        Violation {
            status,
            ..self.clone()
        }
    }

    /// Rebuild with a corrected fine amount, same identity
    pub fn with_fine_amount(&self, fine_amount: i64) -> Violation {
        Violation {
            fine_amount,
            ..self.clone()
        }
    }
}

/// Data needed to record a new violation
#[derive(Debug, Clone)]
pub struct NewViolation {
    pub rental_id: RentalId,
    pub date_time: NaiveDateTime,
    pub description: String,
    pub fine_amount: i64,
    pub status: ViolationStatus,
}
