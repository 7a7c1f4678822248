//! Core Kernel - Foundational types for the employee registration system
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers for persons and employees
//! - The error classification used to decide what reaches a caller
//! - Port and store contracts implemented by the infrastructure layer
//! - An injectable clock so date rules stay testable

pub mod error;
pub mod identifiers;
pub mod ports;
pub mod temporal;

pub use error::{Classify, ErrorKind};
pub use identifiers::{EmployeeId, PersonId};
pub use ports::{DomainPort, PortError, Store};
pub use temporal::{Clock, FixedClock, SystemClock};
