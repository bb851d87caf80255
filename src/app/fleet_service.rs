//! Fleet service
//!
//! Manages the set of cars available for rental. Car status changes caused
//! by rentals are owned by the rental service; this service only creates,
//! looks up, and removes cars.

use std::sync::Arc;

use crate::domain::entities::{Car, CarId, CarStatus, NewCar};
use crate::domain::ports::CarRepository;
use crate::error::DomainError;

/// Service for managing the car fleet
pub struct FleetService<CR>
where
    CR: CarRepository,
{
    cars: Arc<CR>,
}

impl<CR> FleetService<CR>
where
    CR: CarRepository,
{
    pub fn new(cars: Arc<CR>) -> Self {
        Self { cars }
    }

    /// Add a car to the fleet
    ///
    /// Fails with `DuplicateKey` if a car with the same VIN already exists
    /// (VIN comparison is case-insensitive).
    pub async fn add_car(
        &self,
        vin: &str,
        license_plate: &str,
        brand: &str,
        model: &str,
        status: &str,
        hourly_rate: i64,
    ) -> Result<Car, DomainError> {
        if vin.trim().is_empty() {
            return Err(DomainError::invalid("VIN is required"));
        }
        if license_plate.trim().is_empty() {
            return Err(DomainError::invalid("License plate is required"));
        }
        let status: CarStatus = status.parse().map_err(DomainError::InvalidArgument)?;
        if hourly_rate <= 0 {
            return Err(DomainError::invalid("Hourly rate must be positive"));
        }

        if self.cars.find_by_vin(vin).await?.is_some() {
            return Err(DomainError::DuplicateKey(format!(
                "Car with VIN {} already exists",
                vin
            )));
        }

        let car = self
            .cars
            .create(&NewCar {
                vin: vin.to_string(),
                license_plate: license_plate.to_string(),
                brand: brand.to_string(),
                model: model.to_string(),
                status,
                hourly_rate,
            })
            .await?;

        tracing::info!(car_id = %car.id, vin = %car.vin, "car added to fleet");
        Ok(car)
    }

    /// Look up a car by ID
    pub async fn get_car(&self, id: CarId) -> Result<Option<Car>, DomainError> {
        self.cars.find_by_id(id).await
    }

    /// All cars in the fleet
    pub async fn get_all_cars(&self) -> Result<Vec<Car>, DomainError> {
        self.cars.find_all().await
    }

    /// Cars currently in the given status (parsed case-insensitively)
    pub async fn get_cars_by_status(&self, status: &str) -> Result<Vec<Car>, DomainError> {
        let status: CarStatus = status.parse().map_err(DomainError::InvalidArgument)?;
        self.cars.find_by_status(status).await
    }

    /// Remove a car from the fleet
    ///
    /// Returns `Ok(false)` when the car does not exist. There is no
    /// referential-integrity check against rentals; callers are responsible
    /// for not deleting a car that is actively rented.
    pub async fn delete_car(&self, id: CarId) -> Result<bool, DomainError> {
        if self.cars.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.cars.delete(id).await?;
        tracing::info!(car_id = %id, "car removed from fleet");
        Ok(true)
    }
}
