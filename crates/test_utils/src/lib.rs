//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! employee registration test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built person parameters, dates and clocks
//! - `builders`: Builder for employees with sensible defaults
//! - `database`: Database test helpers and container management
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
