//! Test utilities
//!
//! Manual in-memory implementations of the port traits and fixture
//! factories. The in-memory repository assigns ids the way the
//! database would, so the full router can run against it in tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
