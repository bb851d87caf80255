//! In-memory car store

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Car, CarId, CarStatus, NewCar};
use crate::domain::ports::CarRepository;
use crate::error::DomainError;

/// Concurrency-safe keyed storage for cars with monotonic identity assignment
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<HashMap<CarId, Car>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryCarRepository {
    fn default() -> Self {
        Self {
            cars: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cars
    pub fn len(&self) -> usize {
        self.cars.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.read().unwrap().is_empty()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, car: &NewCar) -> Result<Car, DomainError> {
        // Allocation and insertion happen under the write lock as one unit.
        let mut cars = self.cars.write().unwrap();
        let id = CarId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let car = Car {
            id,
            vin: car.vin.clone(),
            license_plate: car.license_plate.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            status: car.status,
            hourly_rate: car.hourly_rate,
        };
        cars.insert(id, car.clone());
        Ok(car)
    }

    async fn save(&self, car: &Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().unwrap();
        cars.insert(car.id, car.clone());
        Ok(car.clone())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        Ok(cars.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        let mut all: Vec<Car> = cars.values().cloned().collect();
        all.sort_by_key(|c| c.id.0);
        Ok(all)
    }

    async fn delete(&self, id: CarId) -> Result<(), DomainError> {
        let mut cars = self.cars.write().unwrap();
        cars.remove(&id);
        Ok(())
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        Ok(cars
            .values()
            .find(|c| c.vin.eq_ignore_ascii_case(vin))
            .cloned())
    }

    async fn find_by_status(&self, status: CarStatus) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        Ok(cars
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: CarId, status: CarStatus) -> Result<bool, DomainError> {
        let mut cars = self.cars.write().unwrap();
        match cars.get(&id) {
            Some(car) => {
                let updated = car.with_status(status);
                cars.insert(id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::new_car;

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let repo = InMemoryCarRepository::new();

        let first = repo.create(&new_car("VIN-A")).await.unwrap();
        let second = repo.create(&new_car("VIN-B")).await.unwrap();

        assert_eq!(first.id, CarId(1));
        assert_eq!(second.id, CarId(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn find_by_vin_ignores_case() {
        let repo = InMemoryCarRepository::new();
        repo.create(&new_car("1hgcm82633a004352")).await.unwrap();

        let found = repo.find_by_vin("1HGCM82633A004352").await.unwrap();

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn update_status_on_missing_car_returns_false() {
        let repo = InMemoryCarRepository::new();

        let updated = repo
            .update_status(CarId(99), CarStatus::Rented)
            .await
            .unwrap();

        assert!(!updated);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_allocate_distinct_ids() {
        let repo = Arc::new(InMemoryCarRepository::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(&new_car(&format!("VIN-{}", i))).await.unwrap().id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 16);
        assert_eq!(repo.len(), 16);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryCarRepository::new();
        let car = repo.create(&new_car("VIN-A")).await.unwrap();

        repo.delete(car.id).await.unwrap();
        repo.delete(car.id).await.unwrap();

        assert!(repo.is_empty());
    }
}
