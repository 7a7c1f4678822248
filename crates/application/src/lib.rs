//! Application Layer
//!
//! Use cases orchestrate the domain crates and the persistence ports:
//!
//! - [`UseCase`], [`UnitOfWork`] and the [`Transactional`] decorator define
//!   how an operation runs inside a transaction
//! - [`RegisterEmployee`] is the registration pipeline
//! - [`UseCaseError`] records the failing [`Stage`] and keeps the original
//!   error as its source
//!
//! # Example
//!
//! ```rust,ignore
//! use application::{RegisterEmployee, StoreUnitOfWork, Transactional, UseCase};
//!
//! let register = Transactional::new(
//!     RegisterEmployee::new(factories, rules, persons, employees, clock),
//!     StoreUnitOfWork::new(store),
//! );
//! let result = register.execute(None, command).await?;
//! ```

pub mod error;
pub mod register_employee;
pub mod use_case;

pub use error::{Stage, UseCaseError, GENERIC_FAILURE};
pub use register_employee::{
    EmploymentData, RegisterEmployee, RegistrationCommand, RegistrationResult,
};
pub use use_case::{NoopUnitOfWork, StoreUnitOfWork, Transactional, UnitOfWork, UseCase};
