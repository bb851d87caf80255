//! Car domain entity
//!
//! A vehicle in the rental fleet. Identified by a store-assigned sequential
//! ID; the VIN is unique across the fleet (case-insensitive).

use serde::{Deserialize, Serialize};

/// Unique identifier for a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarId(pub i64);

impl From<i64> for CarId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability state of a car in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarStatus::Available => write!(f, "AVAILABLE"),
            CarStatus::Rented => write!(f, "RENTED"),
            CarStatus::Maintenance => write!(f, "MAINTENANCE"),
        }
    }
}

impl std::str::FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AVAILABLE" => Ok(CarStatus::Available),
            "RENTED" => Ok(CarStatus::Rented),
            "MAINTENANCE" => Ok(CarStatus::Maintenance),
            _ => Err(format!("Unknown car status: {}", s)),
        }
    }
}

/// A vehicle tracked by the fleet
///
/// Immutable value type: status changes go through the store, which rebuilds
/// the record under the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub vin: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub status: CarStatus,
    pub hourly_rate: i64,
}

impl Car {
    /// Rebuild this car with a different status, same identity
    pub fn with_status(&self, status: CarStatus) -> Car {
        Car {
            status,
            ..self.clone()
        }
    }
}

/// Data needed to create a new car
#[derive(Debug, Clone)]
pub struct NewCar {
    pub vin: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub status: CarStatus,
    pub hourly_rate: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_str_is_case_insensitive() {
        assert_eq!("available".parse::<CarStatus>().unwrap(), CarStatus::Available);
        assert_eq!("RENTED".parse::<CarStatus>().unwrap(), CarStatus::Rented);
        assert_eq!(
            "Maintenance".parse::<CarStatus>().unwrap(),
            CarStatus::Maintenance
        );
        assert!("parked".parse::<CarStatus>().is_err());
    }

    #[test]
    fn status_display_is_uppercase() {
        assert_eq!(CarStatus::Available.to_string(), "AVAILABLE");
        assert_eq!(CarStatus::Rented.to_string(), "RENTED");
        assert_eq!(CarStatus::Maintenance.to_string(), "MAINTENANCE");
    }

    #[test]
    fn with_status_keeps_identity() {
        let car = Car {
            id: CarId(7),
            vin: "1HGCM82633A004352".to_string(),
            license_plate: "AB123CD".to_string(),
            brand: "Honda".to_string(),
            model: "Accord".to_string(),
            status: CarStatus::Available,
            hourly_rate: 25,
        };

        let rented = car.with_status(CarStatus::Rented);

        assert_eq!(rented.id, car.id);
        assert_eq!(rented.vin, car.vin);
        assert_eq!(rented.status, CarStatus::Rented);
    }
}
