//! Adapters layer
//!
//! Implementations of port traits. The only backing store is in-memory;
//! persistence across process restarts is out of scope.

pub mod memory;

pub use memory::{
    InMemoryCarRepository, InMemoryCustomerRepository, InMemoryRentalRepository,
    InMemoryViolationRepository,
};
