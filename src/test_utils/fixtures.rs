//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture produces a valid creation payload that tests customize
//! through the distinguishing argument.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{
    CarId, CarStatus, CustomerId, DepositStatus, NewCar, NewCustomer, NewRental, NewViolation,
    RentalId, RentalStatus, ViolationStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid fixture time")
}

/// An AVAILABLE car with the given VIN
pub fn new_car(vin: &str) -> NewCar {
    NewCar {
        vin: vin.to_string(),
        license_plate: format!("PLATE-{}", vin),
        brand: "Honda".to_string(),
        model: "Accord".to_string(),
        status: CarStatus::Available,
        hourly_rate: 25,
    }
}

/// A customer with the given document numbers
pub fn new_customer(passport: i64, driver_license: i64) -> NewCustomer {
    NewCustomer {
        full_name: "Alice Johnson".to_string(),
        passport,
        driver_license,
        phone: 15550101,
        address: "1 Main St".to_string(),
    }
}

/// An ACTIVE two-day rental with a PENDING deposit
pub fn new_rental(customer_id: CustomerId, car_id: CarId) -> NewRental {
    NewRental {
        customer_id,
        car_id,
        date_start: date(2025, 1, 1),
        date_end: date(2025, 1, 3),
        cost: 100,
        deposit_status: DepositStatus::Pending,
        status: RentalStatus::Active,
    }
}

/// A PENDING speeding violation against the given rental
pub fn new_violation(rental_id: RentalId) -> NewViolation {
    NewViolation {
        rental_id,
        date_time: date_time(2024, 12, 11, 14, 30),
        description: "Speeding ticket".to_string(),
        fine_amount: 150,
        status: ViolationStatus::Pending,
    }
}
