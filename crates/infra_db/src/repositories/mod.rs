//! Repository implementations
//!
//! Row types and SQL for each table group. Every function takes a
//! `&mut PgConnection`, so callers decide whether it runs inside a
//! transaction (`&mut *tx`) or on a pooled connection.

pub mod employee;
pub mod person;

pub use employee::{EmployeeRepository, NewEmployee};
pub use person::{JuridicalPersonRow, NaturalPersonRow, PersonRepository, PersonRow};
