//! In-memory storage adapters
//!
//! One store per entity, each a mapping from identity to entity guarded by a
//! `RwLock`, paired with an atomic counter that assigns identities starting
//! at 1. Nothing is persisted beyond process lifetime; field-specific lookups
//! are linear scans, acceptable at single-process fleet scale.

pub mod car;
pub mod customer;
pub mod rental;
pub mod violation;

pub use car::InMemoryCarRepository;
pub use customer::InMemoryCustomerRepository;
pub use rental::InMemoryRentalRepository;
pub use violation::InMemoryViolationRepository;
