//! Customer domain entity
//!
//! A person allowed to rent cars. Passport and driver license numbers are
//! globally unique and immutable once set; name, phone, and address may be
//! updated by rebuilding the record.

use serde::{Deserialize, Serialize};

/// Unique identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub passport: i64,
    pub driver_license: i64,
    pub phone: i64,
    pub address: String,
}

impl Customer {
    /// Rebuild this customer with new mutable fields; passport and driver
    /// license carry over unchanged.
    pub fn with_contact(&self, full_name: &str, phone: i64, address: &str) -> Customer {
        Customer {
            id: self.id,
            full_name: full_name.to_string(),
            passport: self.passport,
            driver_license: self.driver_license,
            phone,
            address: address.to_string(),
        }
    }
}

/// Data needed to register a new customer
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub full_name: String,
    pub passport: i64,
    pub driver_license: i64,
    pub phone: i64,
    pub address: String,
}
