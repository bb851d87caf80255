//! Unified error type for the rental core
//!
//! Every fallible service and port method reports one of four kinds:
//! - `InvalidArgument`: malformed or out-of-range input
//! - `DuplicateKey`: uniqueness violation (VIN, passport, driver license)
//! - `NotFound`: a referenced entity does not exist where it is required
//! - `IllegalState`: valid in isolation but rejected by current entity state
//!
//! Read-path "not found" is `Ok(None)`, not an error; `NotFound` is reserved
//! for mutating operations whose preconditions reference a missing entity.

use thiserror::Error;

/// Business-rule failures reported by services and ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
