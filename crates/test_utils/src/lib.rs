//! Test Utilities Crate
//!
//! Shared test infrastructure for the close engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built period data with realistic magnitudes
//! - `builders`: builder patterns for generator inputs
//! - `assertions`: entry and money assertion helpers
//! - `generators`: property-based test data strategies

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
