//! Test utilities
//!
//! Fixture factories shared by the adapter and service unit tests. No mock
//! repositories: the in-memory adapters are cheap enough to use directly,
//! and testing against them exercises the real port semantics.

pub mod fixtures;

pub use fixtures::*;
