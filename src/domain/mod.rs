//! Domain layer
//!
//! Pure business model, independent of any storage choice.
//! - `entities`: the rental-business value types
//! - `ports`: storage traits the services are written against

pub mod entities;
pub mod ports;
